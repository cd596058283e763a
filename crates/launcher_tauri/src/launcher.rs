//! Launcher bridge command handlers for desktop host integration.

use launcher_runtime::{DispatchOutcome, LauncherBridge};

/// Consumes the pending deep-link URL captured from host view requests.
///
/// Returns `None` when no deep link is pending; a given URL is delivered to
/// at most one caller.
#[tauri::command]
pub fn launcher_get_startup_url(bridge: tauri::State<'_, LauncherBridge>) -> Option<String> {
    bridge.consume_startup_url()
}

/// Dispatches a named bridge action from embedded content.
///
/// Unknown actions surface the dispatcher's negative acknowledgement as an
/// error string; the bridge itself never panics on them.
#[tauri::command]
pub fn launcher_dispatch(
    bridge: tauri::State<'_, LauncherBridge>,
    action: String,
) -> Result<Option<String>, String> {
    match bridge.dispatch(&action) {
        DispatchOutcome::Handled(url) => Ok(url),
        DispatchOutcome::NotHandled => Err(format!("action `{action}` is not handled")),
    }
}
