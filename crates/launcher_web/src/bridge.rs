//! Invoke-transport bridge bindings for launcher requests.
//!
//! This module routes wrapper calls through `interop`, which selects the
//! wasm transport or the non-wasm parity stubs at compile time.

mod interop;

pub(crate) async fn startup_url() -> Result<Option<String>, String> {
    interop::startup_url().await
}

pub(crate) async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}
