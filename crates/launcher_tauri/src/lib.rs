//! Tauri desktop shell bootstrap for the URL-launcher bridge.
//!
//! This crate keeps command registration and webview wiring localized so the
//! bridge runtime stays free of Tauri internals: the bridge is built in
//! `setup`, installed as managed state for the command handlers, and its
//! interceptor is attached to the main webview's navigation hook.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod external_url;
mod launcher;
mod logging;
mod prefs;

use std::sync::Arc;

use launcher_host::ViewRequest;
use launcher_runtime::LauncherBridge;
use tauri::Manager;

pub use logging::LOG_TARGET;

/// Origins the desktop webview serves the application's own content from.
/// Navigations inside them never leave the shell, the same way the embedded
/// page's first load does.
const SHELL_ORIGIN_PREFIXES: [&str; 2] = ["tauri://", "http://tauri.localhost"];

/// Starts the Tauri desktop host process.
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let bridge = build_bridge(app.handle());
            attach_main_window(app, &bridge);
            app.manage(bridge);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            external_url::external_open_url,
            launcher::launcher_dispatch,
            launcher::launcher_get_startup_url
        ])
        .build(tauri::generate_context!())
        .expect("launcher_tauri failed to build Tauri application")
        .run(handle_run_event);
}

fn build_bridge(app: &tauri::AppHandle) -> LauncherBridge {
    let config = prefs::ScopedConfigSource::from_app(app).unwrap_or_else(|err| {
        log::error!(target: LOG_TARGET, "launcher config unavailable, using defaults: {err}");
        prefs::ScopedConfigSource::default()
    });
    let external_urls = Arc::new(external_url::OpenerExternalUrlService::new(app.clone()));
    let bridge = LauncherBridge::initialize(&config, external_urls, Arc::new(logging::TaggedLogger));
    if let Some(request) = launch_view_request(bridge.policy().scheme_prefix()) {
        bridge.on_view_request(&request);
    }
    bridge
}

/// Builds the startup intake request from the process launch arguments.
///
/// Desktop deep-link launches pass the activating URL as a trailing
/// argument; only arguments carrying the configured scheme qualify.
fn launch_view_request(scheme_prefix: &str) -> Option<ViewRequest> {
    view_request_from_args(std::env::args().skip(1), scheme_prefix)
}

fn view_request_from_args<I>(args: I, scheme_prefix: &str) -> Option<ViewRequest>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .find(|arg| arg.starts_with(scheme_prefix))
        .map(ViewRequest::view)
}

fn attach_main_window(app: &tauri::App, bridge: &LauncherBridge) {
    let interceptor = bridge.interceptor();
    let built =
        tauri::WebviewWindowBuilder::new(app, "main", tauri::WebviewUrl::App("index.html".into()))
            .title("URL Launcher")
            .on_navigation(move |url| {
                let raw = url.as_str();
                if is_shell_origin(raw) {
                    return true;
                }
                !interceptor.handle_navigation(raw)
            })
            .build();
    if let Err(err) = built {
        log::error!(
            target: LOG_TARGET,
            "webview navigation hook unavailable, deep-link capture only: {err}"
        );
    }
}

/// Returns true for the webview's own content origins, which bypass the
/// bridge policy entirely.
fn is_shell_origin(url: &str) -> bool {
    SHELL_ORIGIN_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

#[cfg_attr(
    not(any(target_os = "macos", target_os = "ios")),
    allow(unused_variables)
)]
fn handle_run_event(app: &tauri::AppHandle, event: tauri::RunEvent) {
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    if let tauri::RunEvent::Opened { urls } = event {
        let bridge = app.state::<LauncherBridge>();
        for url in urls {
            bridge.on_view_request(&ViewRequest::view(url.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_shell_origin, view_request_from_args};

    #[test]
    fn shell_origins_bypass_the_bridge_policy() {
        assert!(is_shell_origin("tauri://localhost/index.html"));
        assert!(is_shell_origin("http://tauri.localhost/index.html"));
        assert!(!is_shell_origin("https://example.com"));
        assert!(!is_shell_origin("myapp://open"));
    }

    #[test]
    fn launch_arguments_yield_a_view_request_only_for_the_configured_scheme() {
        let args = ["--flag".to_string(), "myapp://open?id=42".to_string()];
        let request =
            view_request_from_args(args, "myapp://").expect("scheme argument should qualify");
        assert_eq!(request.uri.as_deref(), Some("myapp://open?id=42"));

        let args = ["https://example.com".to_string()];
        assert_eq!(view_request_from_args(args, "myapp://"), None);
    }
}
