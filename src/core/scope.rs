//! Request-scoped metadata store
//!
//! Metadata attached while handling one inbound request must show up on
//! every record logged during that request and on no one else's. Instead of
//! an ambient continuation-local store, the scope is an explicit value:
//! request-entry glue creates one `RequestScope` per request and binds it to
//! the loggers serving that request, which makes the propagation visible at
//! every call site.

use super::metadata::{FieldValue, Metadata};
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared metadata store for a single request's lifetime.
///
/// Cloning produces another handle to the same store, so the scope can be
/// handed to several component loggers cheaply. Two scopes created
/// independently never share fields.
///
/// # Example
///
/// ```
/// use bff_logging::core::RequestScope;
///
/// let scope = RequestScope::new();
/// scope.set("request_id", "req-123");
/// scope.set("user_id", 42);
///
/// let fields = scope.snapshot();
/// assert_eq!(fields.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RequestScope {
    fields: Arc<RwLock<Metadata>>,
}

impl RequestScope {
    /// Create a new empty scope
    pub fn new() -> Self {
        Self {
            fields: Arc::new(RwLock::new(Metadata::new())),
        }
    }

    /// Set one field, overwriting any previous value for the key
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.write().insert(key, value);
    }

    /// Merge a metadata mapping into the scope.
    ///
    /// Later assignments win on key collision; merging disjoint mappings
    /// leaves both present.
    pub fn assign(&self, metadata: Metadata) {
        self.fields.write().merge(metadata);
    }

    /// Remove a field from the scope
    pub fn remove(&self, key: &str) {
        self.fields.write().remove(key);
    }

    /// Clear all fields
    pub fn clear(&self) {
        *self.fields.write() = Metadata::new();
    }

    /// Clone of the current fields
    pub fn snapshot(&self) -> Metadata {
        self.fields.read().clone()
    }

    /// Merge scope fields into a record's fields.
    ///
    /// Per-call fields take priority over scope fields.
    pub fn merge_into(&self, fields: &mut Metadata) {
        fields.merge_missing(&self.fields.read());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.read().len()
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}
