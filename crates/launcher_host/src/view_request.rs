//! Host view-request model shared by the launch and runtime intake paths.

use serde::{Deserialize, Serialize};

/// Action code carried by host requests that ask the application to view a
/// URI. Requests with any other action never reach the deep-link slot.
pub const ACTION_VIEW: &str = "view";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A host-delivered request to view a URI, at launch or while running.
pub struct ViewRequest {
    /// Host action code; only [`ACTION_VIEW`] requests carry deep links.
    pub action: String,
    /// The URI the host was asked to view, when one was attached.
    pub uri: Option<String>,
}

impl ViewRequest {
    /// Creates a request with an explicit action code.
    pub fn new(action: impl Into<String>, uri: Option<String>) -> Self {
        Self {
            action: action.into(),
            uri,
        }
    }

    /// Creates a view-action request for `uri`.
    pub fn view(uri: impl Into<String>) -> Self {
        Self::new(ACTION_VIEW, Some(uri.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_constructor_uses_the_view_action() {
        let request = ViewRequest::view("myapp://open?id=42");
        assert_eq!(request.action, ACTION_VIEW);
        assert_eq!(request.uri.as_deref(), Some("myapp://open?id=42"));
    }

    #[test]
    fn view_request_round_trips_through_json() {
        let request = ViewRequest::new("edit", None);
        let raw = serde_json::to_string(&request).expect("serialize request");
        let parsed: ViewRequest = serde_json::from_str(&raw).expect("parse request");
        assert_eq!(parsed, request);
    }
}
