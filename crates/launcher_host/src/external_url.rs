//! External URL host-service contracts.

use std::sync::{Mutex, PoisonError};

/// Host service for opening external URLs outside the embedded webview.
///
/// Dispatch is synchronous: it either hands the verbatim URL to the host's
/// default viewer or reports why the host refused it.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
/// Recording external URL service for navigation tests.
///
/// Dispatches succeed and are recorded in order unless a failure has been
/// scripted with [`MemoryExternalUrlService::fail_with`].
pub struct MemoryExternalUrlService {
    opened: Mutex<Vec<String>>,
    failure: Mutex<Option<String>>,
}

impl MemoryExternalUrlService {
    /// Scripts every subsequent dispatch to fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        *failure = Some(message.into());
    }

    /// Returns the URLs dispatched so far, in delivery order.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        let failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(message) = failure.as_ref() {
            return Err(message.clone());
        }
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        Ok(())
    }
}
