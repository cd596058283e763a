//! External URL dispatch through the Tauri opener plugin.

use launcher_host::ExternalUrlService;
use tauri_plugin_opener::OpenerExt;

/// Opens a URL with the system default external handler through the Tauri opener plugin.
#[tauri::command]
pub fn external_open_url(app: tauri::AppHandle, url: String) -> Result<(), String> {
    open_with_opener(&app, &url)
}

fn open_with_opener(app: &tauri::AppHandle, url: &str) -> Result<(), String> {
    app.opener()
        .open_url(url, None::<String>)
        .map_err(|err| format!("external URL open failed: {err}"))
}

#[derive(Clone)]
/// Desktop external URL service backed by the opener plugin.
pub(crate) struct OpenerExternalUrlService {
    app: tauri::AppHandle,
}

impl OpenerExternalUrlService {
    /// Creates the service over the shell's app handle.
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ExternalUrlService for OpenerExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        open_with_opener(&self.app, url)
    }
}
