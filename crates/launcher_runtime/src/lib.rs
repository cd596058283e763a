//! Core URL-launcher bridge runtime: deep-link capture and navigation policy.
//!
//! This crate owns the bridge semantics (the scheme classification
//! predicate, the single pending deep-link slot, and the one-shot consume
//! protocol) behind the `launcher_host` contracts so shells can wire it to
//! any webview transport. Desktop wiring lives in `launcher_tauri`;
//! content-side wrappers live in `launcher_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod interceptor;
pub mod pending;
pub mod policy;

pub use bridge::{DispatchOutcome, LauncherBridge, ACTION_GET_STARTUP_URL};
pub use interceptor::NavigationInterceptor;
pub use pending::PendingDeepLink;
pub use policy::{NavigationPolicy, DEFAULT_URL_SCHEME, URL_SCHEME_KEY};
