//! Bridge diagnostics capability contracts and adapters.

use std::sync::{Mutex, PoisonError};

/// Severity of a bridge diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeLogLevel {
    /// Routine events: scheme selection, deep-link receipt.
    Debug,
    /// Failures: external-view dispatch errors, degraded wiring.
    Error,
}

/// A recorded diagnostic line: severity plus the rendered message.
pub type BridgeLogEntry = (BridgeLogLevel, String);

/// Host capability for tagged bridge diagnostics.
///
/// The bridge never raises across its boundary; everything it has to say
/// about failures goes through this capability instead.
pub trait BridgeLogger {
    /// Records a debug-level message.
    fn debug(&self, message: &str);

    /// Records an error-level message with an optional cause.
    fn error(&self, message: &str, cause: Option<&str>);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op logger for unsupported targets and baseline tests.
pub struct NoopBridgeLogger;

impl BridgeLogger for NoopBridgeLogger {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str, _cause: Option<&str>) {}
}

#[derive(Debug, Default)]
/// Recording logger for assertions in tests.
pub struct MemoryBridgeLogger {
    entries: Mutex<Vec<BridgeLogEntry>>,
}

impl MemoryBridgeLogger {
    /// Returns the recorded entries in emission order.
    pub fn entries(&self) -> Vec<BridgeLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the error-level messages, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(level, _)| *level == BridgeLogLevel::Error)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: BridgeLogLevel, message: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message));
    }
}

impl BridgeLogger for MemoryBridgeLogger {
    fn debug(&self, message: &str) {
        self.record(BridgeLogLevel::Debug, message.to_string());
    }

    fn error(&self, message: &str, cause: Option<&str>) {
        let rendered = match cause {
            Some(cause) => format!("{message}: {cause}"),
            None => message.to_string(),
        };
        self.record(BridgeLogLevel::Error, rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_records_levels_and_renders_causes() {
        let logger = MemoryBridgeLogger::default();
        let logger_obj: &dyn BridgeLogger = &logger;

        logger_obj.debug("scheme chosen");
        logger_obj.error("dispatch failed", Some("no handler"));
        logger_obj.error("hook unavailable", None);

        assert_eq!(
            logger.entries(),
            vec![
                (BridgeLogLevel::Debug, "scheme chosen".to_string()),
                (BridgeLogLevel::Error, "dispatch failed: no handler".to_string()),
                (BridgeLogLevel::Error, "hook unavailable".to_string()),
            ]
        );
        assert_eq!(
            logger.errors(),
            vec![
                "dispatch failed: no handler".to_string(),
                "hook unavailable".to_string()
            ]
        );
    }
}
