//! Shared transport interop for launcher bridge wrappers.
//!
//! This module routes calls to target-specific implementations while
//! preserving a uniform API for the public wrapper functions.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub(crate) async fn startup_url() -> Result<Option<String>, String> {
    imp::startup_url().await
}

pub(crate) async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}
