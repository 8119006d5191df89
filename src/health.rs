//! Service health payload
//!
//! The wire route belongs to the web framework hosting this crate; only the
//! payload lives here. It shares the service name and version with the
//! logger's base fields so logs and health reports identify the same build.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Health payload reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// ISO 8601 moment the report was produced
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthReport {
    /// Produce a report for the current moment.
    #[must_use]
    pub fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: crate::SERVICE_NAME.to_string(),
            version: crate::SERVICE_VERSION.to_string(),
        }
    }
}
