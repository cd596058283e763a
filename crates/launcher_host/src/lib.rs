//! Typed host-domain contracts and shared models for the URL-launcher bridge.
//!
//! This crate is the API-first boundary for the host services the launcher
//! runtime consumes: static configuration, external URL dispatch, and tagged
//! diagnostics. Concrete adapters live in `launcher_tauri` (desktop webview
//! transport) while content-side wrappers live in `launcher_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod external_url;
pub mod logging;
pub mod view_request;

pub use config::{ConfigSource, MemoryConfigSource, NoopConfigSource};
pub use external_url::{ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService};
pub use logging::{
    BridgeLogEntry, BridgeLogLevel, BridgeLogger, MemoryBridgeLogger, NoopBridgeLogger,
};
pub use view_request::{ViewRequest, ACTION_VIEW};
