//! Diagnostic sinks for store failures.
//!
//! Store failures are not surfaced as user-facing feedback by the registry.
//! They are reported here and the registry carries on with its previous
//! state.

use std::fmt;

use parking_lot::Mutex;
use tracing::warn;

use hookbook_protocols::StoreError;

/// Registry operation that hit the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A reported store failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub operation: Operation,
    pub status: Option<u16>,
    pub message: String,
}

impl Diagnostic {
    pub fn from_store_error(operation: Operation, error: &StoreError) -> Self {
        Self {
            operation,
            status: error.status(),
            message: error.detail(),
        }
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Sink that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        warn!(
            operation = %diagnostic.operation,
            status = ?diagnostic.status,
            "Webhook store call failed: {}",
            diagnostic.message
        );
    }
}

/// Sink that keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|d| d.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_from_api_error() {
        let err = StoreError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        let diagnostic = Diagnostic::from_store_error(Operation::Refresh, &err);
        assert_eq!(diagnostic.operation, Operation::Refresh);
        assert_eq!(diagnostic.status, Some(401));
        assert_eq!(diagnostic.message, "unauthorized");
    }

    #[test]
    fn test_diagnostic_from_network_error() {
        let err = StoreError::Network("connection refused".to_string());
        let diagnostic = Diagnostic::from_store_error(Operation::Create, &err);
        assert_eq!(diagnostic.status, None);
        assert!(diagnostic.message.contains("connection refused"));
    }

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(Diagnostic {
            operation: Operation::Delete,
            status: Some(404),
            message: "not found".to_string(),
        });

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.messages(), vec!["not found".to_string()]);
        assert_eq!(sink.entries()[0].operation, Operation::Delete);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        TracingSink.record(Diagnostic {
            operation: Operation::Update,
            status: None,
            message: "timeout".to_string(),
        });
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Refresh.to_string(), "refresh");
        assert_eq!(Operation::Update.as_str(), "update");
    }
}
