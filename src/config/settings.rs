//! Runtime settings loading
//!
//! Settings come from optional config files layered under environment
//! variables. Every key has a compiled-in default, so a bare process with no
//! configuration at all still starts with sensible values.

use crate::core::Result;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

/// Runtime settings consumed by the logging layer.
///
/// Keys map to environment variables under the `BFF` prefix with `__` as
/// separator, e.g. `BFF__LOG_LEVEL=debug` or `BFF__ENVIRONMENT=production`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSettings {
    /// Deployment environment name; `"production"` selects JSON output
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Minimum severity name; unrecognized values fall back to `info`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Verbose development output toggle; any casing of `"true"` enables it
    #[serde(default)]
    pub log_local_verbose: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl RuntimeSettings {
    /// Load settings from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`BFF__*`)
    /// 2. `config/local.*` (if present)
    /// 3. `config/default.*` (if present)
    /// 4. Compiled-in defaults
    pub fn load() -> Result<Self> {
        let loader = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BFF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(loader.try_deserialize()?)
    }

    /// True when verbose development output was requested.
    pub fn is_verbose(&self) -> bool {
        self.log_local_verbose.eq_ignore_ascii_case("true")
    }

    /// True when running in the production environment.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_local_verbose: String::new(),
            port: default_port(),
            host: default_host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RuntimeSettings::default();
        assert_eq!(settings.environment, "development");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_local_verbose, "");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.host, "0.0.0.0");
    }

    #[test]
    fn test_verbose_flag_casing() {
        let mut settings = RuntimeSettings::default();
        assert!(!settings.is_verbose());

        settings.log_local_verbose = "true".to_string();
        assert!(settings.is_verbose());

        settings.log_local_verbose = "TRUE".to_string();
        assert!(settings.is_verbose());

        settings.log_local_verbose = "True".to_string();
        assert!(settings.is_verbose());

        settings.log_local_verbose = "yes".to_string();
        assert!(!settings.is_verbose());

        settings.log_local_verbose = "1".to_string();
        assert!(!settings.is_verbose());
    }

    #[test]
    fn test_production_detection() {
        let mut settings = RuntimeSettings::default();
        assert!(!settings.is_production());

        settings.environment = "production".to_string();
        assert!(settings.is_production());

        // Only the exact name counts
        settings.environment = "Production".to_string();
        assert!(!settings.is_production());
    }

    #[test]
    fn test_deserialize_from_partial_source() {
        let loader = ConfigLoader::builder()
            .add_source(config::File::from_str(
                "environment: staging\nport: 8080\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap();

        let settings: RuntimeSettings = loader.try_deserialize().unwrap();
        assert_eq!(settings.environment, "staging");
        assert_eq!(settings.port, 8080);
        // Untouched keys keep their defaults
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.host, "0.0.0.0");
    }
}
