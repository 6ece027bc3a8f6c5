use crate::{FailureKind, ScrapeFailure};

pub const MISSING_INPUT_MESSAGE: &str = "both a target URL and a CSS selector are required";

/// One scrape invocation. Built fresh from the form and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub target_url: String,
    pub selector: String,
    pub use_relay: bool,
}

impl ScrapeRequest {
    pub fn new(target_url: impl Into<String>, selector: impl Into<String>, use_relay: bool) -> Self {
        Self {
            target_url: target_url.into(),
            selector: selector.into(),
            use_relay,
        }
    }

    pub fn validate(&self) -> Result<(), ScrapeFailure> {
        validate_input(&self.target_url, &self.selector)
    }
}

/// Rejects the invocation when either field is empty. Whitespace is left alone.
pub fn validate_input(target_url: &str, selector: &str) -> Result<(), ScrapeFailure> {
    if target_url.is_empty() || selector.is_empty() {
        return Err(ScrapeFailure::new(
            FailureKind::Validation,
            MISSING_INPUT_MESSAGE,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        assert!(validate_input("https://example.com", "h3").is_ok());
        for (url, selector) in [("", "h3"), ("https://example.com", ""), ("", "")] {
            let err = validate_input(url, selector).unwrap_err();
            assert_eq!(err.kind, FailureKind::Validation);
            assert_eq!(err.message, MISSING_INPUT_MESSAGE);
        }
    }

    #[test]
    fn whitespace_only_counts_as_present() {
        assert!(validate_input(" ", " ").is_ok());
    }
}
