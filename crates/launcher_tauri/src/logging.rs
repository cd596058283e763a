//! Bridge logger adapter over the `log` facade.

use launcher_host::BridgeLogger;

/// Log target tag for launcher bridge records, for filter expressions like
/// `RUST_LOG=url_launcher=debug`.
pub const LOG_TARGET: &str = "url_launcher";

#[derive(Debug, Clone, Copy, Default)]
/// Desktop bridge logger emitting tagged records through the `log` facade.
pub(crate) struct TaggedLogger;

impl BridgeLogger for TaggedLogger {
    fn debug(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str, cause: Option<&str>) {
        match cause {
            Some(cause) => log::error!(target: LOG_TARGET, "{message}: {cause}"),
            None => log::error!(target: LOG_TARGET, "{message}"),
        }
    }
}
