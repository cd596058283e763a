//! The launcher bridge component: deep-link intake, consume, and dispatch.

use std::sync::Arc;

use launcher_host::{BridgeLogger, ConfigSource, ExternalUrlService, ViewRequest, ACTION_VIEW};

use crate::interceptor::NavigationInterceptor;
use crate::pending::PendingDeepLink;
use crate::policy::NavigationPolicy;

/// Bridge action that consumes the pending deep link.
pub const ACTION_GET_STARTUP_URL: &str = "getStartupUrl";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of dispatching one bridge action from embedded content.
pub enum DispatchOutcome {
    /// The action was serviced; the payload is the consumed URL, if any.
    /// A `None` payload is a legitimate success, not an error.
    Handled(Option<String>),
    /// The action is not one this bridge services.
    NotHandled,
}

/// Deep-link capture and navigation-policy bridge for one webview host.
///
/// Construction is the single uninitialized-to-ready transition: a bridge
/// value that exists is ready, and it is dropped with the host process.
/// There is no transition back.
pub struct LauncherBridge {
    policy: NavigationPolicy,
    pending: PendingDeepLink,
    external_urls: Arc<dyn ExternalUrlService + Send + Sync>,
    logger: Arc<dyn BridgeLogger + Send + Sync>,
}

impl LauncherBridge {
    /// Initializes the bridge from the host configuration and services.
    ///
    /// Reads the scheme name once (falling back to the default when the
    /// configuration has no usable value), derives the classification
    /// policy, and starts with an empty deep-link slot.
    pub fn initialize(
        config: &dyn ConfigSource,
        external_urls: Arc<dyn ExternalUrlService + Send + Sync>,
        logger: Arc<dyn BridgeLogger + Send + Sync>,
    ) -> Self {
        let policy = NavigationPolicy::from_config(config);
        logger.debug(&format!(
            "initialized with custom scheme: {}",
            policy.scheme_prefix()
        ));
        Self {
            policy,
            pending: PendingDeepLink::new(),
            external_urls,
            logger,
        }
    }

    /// The classification rules derived from configuration.
    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    /// Builds a navigation hook sharing this bridge's policy and services.
    ///
    /// Hosts whose webview exposes a settable navigation callback install
    /// it by composition; when no hook can be installed the bridge still
    /// services deep-link capture and consume.
    pub fn interceptor(&self) -> NavigationInterceptor {
        NavigationInterceptor::new(
            self.policy.clone(),
            self.external_urls.clone(),
            self.logger.clone(),
        )
    }

    /// Intake path for host view requests, at launch and while running.
    ///
    /// Requests with a foreign action or no attached URI are ignored
    /// without side effect; otherwise the pending slot is overwritten with
    /// the URI, last write wins.
    pub fn on_view_request(&self, request: &ViewRequest) {
        if request.action != ACTION_VIEW {
            return;
        }
        let Some(uri) = request.uri.as_deref() else {
            return;
        };
        self.pending.store(uri);
        self.logger.debug(&format!("deep link URL received: {uri}"));
    }

    /// Consumes the pending deep link, returning it at most once.
    pub fn consume_startup_url(&self) -> Option<String> {
        self.pending.take()
    }

    /// Dispatches one bridge action by name.
    ///
    /// Unknown actions report [`DispatchOutcome::NotHandled`] without
    /// raising; the transport layer decides how to surface that to content.
    pub fn dispatch(&self, action: &str) -> DispatchOutcome {
        if action == ACTION_GET_STARTUP_URL {
            DispatchOutcome::Handled(self.consume_startup_url())
        } else {
            DispatchOutcome::NotHandled
        }
    }
}

#[cfg(test)]
mod tests {
    use launcher_host::{
        MemoryBridgeLogger, MemoryConfigSource, MemoryExternalUrlService, NoopConfigSource,
    };

    use super::*;

    fn bridge() -> LauncherBridge {
        LauncherBridge::initialize(
            &NoopConfigSource,
            Arc::new(MemoryExternalUrlService::default()),
            Arc::new(MemoryBridgeLogger::default()),
        )
    }

    #[test]
    fn initialize_logs_the_chosen_scheme_prefix() {
        let logger = Arc::new(MemoryBridgeLogger::default());
        let config = MemoryConfigSource::from_entries([("URL_SCHEME", "acme")]);
        let bridge = LauncherBridge::initialize(
            &config,
            Arc::new(MemoryExternalUrlService::default()),
            logger.clone(),
        );

        assert_eq!(bridge.policy().scheme_prefix(), "acme://");
        assert_eq!(
            logger.entries().first().map(|(_, line)| line.clone()),
            Some("initialized with custom scheme: acme://".to_string())
        );
    }

    #[test]
    fn view_request_intake_fills_the_slot_once() {
        let bridge = bridge();
        bridge.on_view_request(&ViewRequest::view("myapp://open?id=42"));
        assert_eq!(
            bridge.consume_startup_url(),
            Some("myapp://open?id=42".to_string())
        );
        assert_eq!(bridge.consume_startup_url(), None);
    }

    #[test]
    fn foreign_action_intake_never_touches_the_slot() {
        let bridge = bridge();
        bridge.on_view_request(&ViewRequest::new(
            "edit",
            Some("myapp://ignored".to_string()),
        ));
        assert_eq!(bridge.consume_startup_url(), None);
    }

    #[test]
    fn view_request_without_uri_is_a_silent_noop() {
        let bridge = bridge();
        bridge.on_view_request(&ViewRequest::view("myapp://kept"));
        bridge.on_view_request(&ViewRequest::new(ACTION_VIEW, None));
        assert_eq!(
            bridge.consume_startup_url(),
            Some("myapp://kept".to_string())
        );
    }

    #[test]
    fn dispatch_services_the_consume_action_and_rejects_the_rest() {
        let bridge = bridge();
        bridge.on_view_request(&ViewRequest::view("myapp://profile/7"));

        assert_eq!(
            bridge.dispatch(ACTION_GET_STARTUP_URL),
            DispatchOutcome::Handled(Some("myapp://profile/7".to_string()))
        );
        assert_eq!(
            bridge.dispatch(ACTION_GET_STARTUP_URL),
            DispatchOutcome::Handled(None)
        );
        assert_eq!(bridge.dispatch("unknownAction"), DispatchOutcome::NotHandled);
    }
}
