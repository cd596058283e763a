//! URL classification over the configured scheme prefix.

use launcher_host::ConfigSource;

/// Configuration key holding the bare scheme name, without separator.
pub const URL_SCHEME_KEY: &str = "URL_SCHEME";

/// Scheme used when the configuration source carries no usable value.
pub const DEFAULT_URL_SCHEME: &str = "myapp";

const FILE_PREFIX: &str = "file://";
const SCHEME_SEPARATOR: &str = "://";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable URL classification rules for one bridge instance.
///
/// Classification is a byte-exact prefix test over the raw navigation
/// string; no canonicalization or decoding is applied, so `FILE://` and
/// mixed-case app-scheme URLs classify as external.
pub struct NavigationPolicy {
    scheme_prefix: String,
}

impl NavigationPolicy {
    /// Builds the policy from the configured scheme name.
    ///
    /// An absent, empty, or whitespace-only `URL_SCHEME` value falls back to
    /// [`DEFAULT_URL_SCHEME`]: a degenerate `://` prefix would classify every
    /// scheme-qualified URL as internal.
    pub fn from_config(config: &dyn ConfigSource) -> Self {
        let scheme = match config.get_value(URL_SCHEME_KEY) {
            Some(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_URL_SCHEME.to_string(),
        };
        Self::from_scheme(scheme)
    }

    /// Builds the policy for an explicit scheme name.
    ///
    /// Callers are responsible for supplying a non-empty scheme;
    /// configuration-driven construction goes through [`Self::from_config`],
    /// which applies the default fallback.
    pub fn from_scheme(scheme: impl Into<String>) -> Self {
        let mut scheme_prefix = scheme.into();
        scheme_prefix.push_str(SCHEME_SEPARATOR);
        Self { scheme_prefix }
    }

    /// The `<scheme>://` prefix marking URLs that belong to this app.
    pub fn scheme_prefix(&self) -> &str {
        &self.scheme_prefix
    }

    /// Returns true when `url` stays inside the embedded webview.
    ///
    /// Local assets (`file://`) and the configured app scheme are internal;
    /// everything else, including every `http://` and `https://` URL, is
    /// external.
    pub fn is_internal(&self, url: &str) -> bool {
        url.starts_with(FILE_PREFIX) || url.starts_with(&self.scheme_prefix)
    }

    /// Returns true when `url` must be handed to the host OS viewer.
    pub fn should_divert(&self, url: &str) -> bool {
        !self.is_internal(url)
    }
}

#[cfg(test)]
mod tests {
    use launcher_host::{MemoryConfigSource, NoopConfigSource};

    use super::*;

    #[test]
    fn absent_configuration_falls_back_to_default_scheme() {
        let policy = NavigationPolicy::from_config(&NoopConfigSource);
        assert_eq!(policy.scheme_prefix(), "myapp://");
    }

    #[test]
    fn configured_scheme_name_becomes_the_prefix() {
        let config = MemoryConfigSource::from_entries([(URL_SCHEME_KEY, "acme")]);
        let policy = NavigationPolicy::from_config(&config);
        assert_eq!(policy.scheme_prefix(), "acme://");
    }

    #[test]
    fn empty_or_whitespace_scheme_value_falls_back_to_default() {
        for value in ["", "   ", "\t"] {
            let config = MemoryConfigSource::from_entries([(URL_SCHEME_KEY, value)]);
            let policy = NavigationPolicy::from_config(&config);
            assert_eq!(policy.scheme_prefix(), "myapp://", "value {value:?}");
        }
    }

    #[test]
    fn file_urls_are_internal() {
        let policy = NavigationPolicy::from_scheme("myapp");
        assert!(policy.is_internal("file:///android_asset/www/index.html"));
        assert!(policy.is_internal("file://"));
    }

    #[test]
    fn configured_scheme_urls_are_internal_including_the_bare_prefix() {
        let policy = NavigationPolicy::from_scheme("myapp");
        assert!(policy.is_internal("myapp://settings"));
        assert!(policy.is_internal("myapp://"));
    }

    #[test]
    fn web_and_foreign_scheme_urls_are_external() {
        let policy = NavigationPolicy::from_scheme("myapp");
        for url in [
            "http://example.com",
            "https://example.com/page",
            "tel:911",
            "mailto:a@example.com",
        ] {
            assert!(policy.should_divert(url), "url {url:?}");
        }
    }

    #[test]
    fn scheme_without_separator_is_external() {
        let policy = NavigationPolicy::from_scheme("myapp");
        assert!(!policy.is_internal("myapp:path"));
    }

    #[test]
    fn prefix_comparison_is_byte_exact() {
        let policy = NavigationPolicy::from_scheme("myapp");
        assert!(!policy.is_internal("MYAPP://x"));
        assert!(!policy.is_internal("FILE:///asset"));
    }

    #[test]
    fn empty_and_whitespace_urls_are_external() {
        let policy = NavigationPolicy::from_scheme("myapp");
        assert!(policy.should_divert(""));
        assert!(policy.should_divert("   "));
    }
}
