use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use scrape_core::ScrapeRequest;
use thiserror::Error;

pub const URL_PLACEHOLDER: &str = "{url}";
pub const DEFAULT_RELAY_TEMPLATE: &str = "https://corsproxy.io/?{url}";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("relay template {template:?} has no {{url}} placeholder")]
pub struct RelayTemplateError {
    pub template: String,
}

/// Relay endpoint contract. The template holds a `{url}` placeholder that is
/// replaced by the percent-encoded target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    template: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_RELAY_TEMPLATE.to_string(),
        }
    }
}

impl RelayConfig {
    pub fn new(template: impl Into<String>) -> Result<Self, RelayTemplateError> {
        let template = template.into();
        if !template.contains(URL_PLACEHOLDER) {
            return Err(RelayTemplateError { template });
        }
        Ok(Self { template })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn wrap(&self, target_url: &str) -> String {
        self.template
            .replace(URL_PLACEHOLDER, &encode_component(target_url))
    }
}

/// Percent-encodes like `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// The locator actually retrieved for a request.
pub fn effective_url(request: &ScrapeRequest, relay: &RelayConfig) -> String {
    if request.use_relay {
        relay.wrap(&request.target_url)
    } else {
        request.target_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_relay_wraps_encoded_url() {
        let relay = RelayConfig::default();
        assert_eq!(
            relay.wrap("https://example.com/jobs?q=看護師&p=2"),
            "https://corsproxy.io/?https%3A%2F%2Fexample.com%2Fjobs%3Fq%3D%E7%9C%8B%E8%AD%B7%E5%B8%AB%26p%3D2"
        );
    }

    #[test]
    fn component_encoding_keeps_unreserved_marks() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j k"), "a-b_c.d!e~f*g'h(i)j%20k");
    }

    #[test]
    fn template_requires_placeholder() {
        let err = RelayConfig::new("https://relay.example/").unwrap_err();
        assert!(err.to_string().contains("{url}"));
        let relay = RelayConfig::new("https://relay.example/raw?url={url}").unwrap();
        assert_eq!(
            relay.wrap("http://a.b/"),
            "https://relay.example/raw?url=http%3A%2F%2Fa.b%2F"
        );
    }

    #[test]
    fn relay_toggle_only_changes_locator() {
        let relay = RelayConfig::default();
        let direct = ScrapeRequest::new("https://example.com", "h3", false);
        let relayed = ScrapeRequest {
            use_relay: true,
            ..direct.clone()
        };
        assert_eq!(effective_url(&direct, &relay), "https://example.com");
        assert_eq!(
            effective_url(&relayed, &relay),
            "https://corsproxy.io/?https%3A%2F%2Fexample.com"
        );
        assert_eq!(direct.selector, relayed.selector);
    }
}
