//! Navigation hook logic diverting external URLs to the host OS.

use std::sync::Arc;

use launcher_host::{BridgeLogger, ExternalUrlService};

use crate::policy::NavigationPolicy;

#[derive(Clone)]
/// Per-navigation decision logic installed on the embedded webview.
///
/// The interceptor owns no mutable state beyond the immutable policy, so it
/// may run concurrently on webview callbacks and be re-entered from the
/// fallback path without coordination.
pub struct NavigationInterceptor {
    policy: NavigationPolicy,
    external_urls: Arc<dyn ExternalUrlService + Send + Sync>,
    logger: Arc<dyn BridgeLogger + Send + Sync>,
}

impl NavigationInterceptor {
    /// Creates an interceptor over `policy` and the host services.
    pub fn new(
        policy: NavigationPolicy,
        external_urls: Arc<dyn ExternalUrlService + Send + Sync>,
        logger: Arc<dyn BridgeLogger + Send + Sync>,
    ) -> Self {
        Self {
            policy,
            external_urls,
            logger,
        }
    }

    /// The classification rules this interceptor applies.
    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    /// Decides one candidate navigation.
    ///
    /// Returns true when the navigation was consumed by an external-view
    /// dispatch, so the webview must not also load the URL. Internal URLs
    /// and failed dispatches return false, leaving the webview to apply its
    /// default policy for the URL.
    pub fn handle_navigation(&self, url: &str) -> bool {
        if self.policy.is_internal(url) {
            return false;
        }
        match self.external_urls.open_url(url) {
            Ok(()) => true,
            Err(err) => {
                self.logger.error(
                    &format!("could not launch external URL `{url}`"),
                    Some(err.as_str()),
                );
                false
            }
        }
    }
}
