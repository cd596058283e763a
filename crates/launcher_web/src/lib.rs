//! Browser (`wasm32`) content-side wrappers for the URL-launcher bridge.
//!
//! This crate is the embedded-content half of the bridge: async wrappers
//! that route launcher requests over the desktop webview's invoke
//! transport. Bindings live under `bridge/` with a shared wasm/non-wasm
//! interop split so the crate also compiles and tests on the host target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;

/// Consumes the deep-link URL that launched or resumed the application.
///
/// Resolves to `None` when no deep link is pending; a given URL is
/// delivered to at most one caller.
pub async fn startup_url() -> Result<Option<String>, String> {
    bridge::startup_url().await
}

/// Asks the host OS to open `url` in its default external viewer.
pub async fn open_external_url(url: &str) -> Result<(), String> {
    bridge::open_external_url(url).await
}
