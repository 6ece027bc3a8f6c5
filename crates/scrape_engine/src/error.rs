use scrape_core::{FailureKind, ScrapeFailure, MISSING_INPUT_MESSAGE};
use thiserror::Error;

use crate::{FetchError, SelectorError};

/// Every way a scrape invocation can fail. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,
    #[error("invalid target URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(
        "HTTP 403 (access denied): the site is probably blocking the request{}.",
        relay_note(.via_relay)
    )]
    Blocked { via_relay: bool },
    #[error("request failed with HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("{}", transport_message(.via_relay))]
    Transport { via_relay: bool, detail: String },
    #[error("{}", .0.message)]
    Selector(#[from] SelectorError),
    #[error("a scrape is already in progress")]
    Busy,
}

impl ScrapeError {
    /// Adds relay context to a fetch failure.
    pub fn from_fetch(err: FetchError, via_relay: bool) -> Self {
        match err {
            FetchError::InvalidUrl { url, reason } => ScrapeError::InvalidUrl { url, reason },
            FetchError::HttpStatus { status: 403 } => ScrapeError::Blocked { via_relay },
            FetchError::HttpStatus { status } => ScrapeError::HttpStatus { status },
            FetchError::Transport(detail) => ScrapeError::Transport { via_relay, detail },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ScrapeError::MissingInput => FailureKind::Validation,
            ScrapeError::InvalidUrl { .. } => FailureKind::InvalidUrl,
            ScrapeError::Blocked { .. } => FailureKind::HttpStatus(403),
            ScrapeError::HttpStatus { status } => FailureKind::HttpStatus(*status),
            ScrapeError::Transport { .. } => FailureKind::Transport,
            ScrapeError::Selector(_) => FailureKind::Selector,
            ScrapeError::Busy => FailureKind::Busy,
        }
    }
}

impl From<ScrapeError> for ScrapeFailure {
    fn from(err: ScrapeError) -> Self {
        ScrapeFailure::new(err.kind(), err.to_string())
    }
}

fn relay_note(via_relay: &bool) -> &'static str {
    if *via_relay {
        " (via the CORS relay)"
    } else {
        ""
    }
}

fn transport_message(via_relay: &bool) -> String {
    let hint = if *via_relay {
        "The CORS relay may be unavailable, or the target site may be blocking it. \
         Try disabling the relay for this site."
    } else {
        "Hint: try enabling the CORS relay option."
    };
    format!(
        "failed to fetch the page.\n\
         A cross-origin (CORS) restriction is the likely cause.\n\n{hint}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_mentions_status_and_relay() {
        let relayed = ScrapeError::from_fetch(FetchError::HttpStatus { status: 403 }, true);
        let message = relayed.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("via the CORS relay"));
        assert_eq!(relayed.kind(), FailureKind::HttpStatus(403));

        let direct = ScrapeError::from_fetch(FetchError::HttpStatus { status: 403 }, false);
        assert!(!direct.to_string().contains("relay"));
    }

    #[test]
    fn other_status_names_the_code() {
        let err = ScrapeError::from_fetch(FetchError::HttpStatus { status: 502 }, true);
        assert_eq!(err.to_string(), "request failed with HTTP status 502");
    }

    #[test]
    fn transport_hint_follows_relay_state() {
        let direct = ScrapeError::from_fetch(FetchError::Transport("refused".into()), false);
        let message = direct.to_string();
        assert!(message.contains("CORS"));
        assert!(message.contains("try enabling the CORS relay"));

        let relayed = ScrapeError::from_fetch(FetchError::Transport("refused".into()), true);
        assert!(relayed.to_string().contains("Try disabling the relay"));
        assert_eq!(relayed.kind(), FailureKind::Transport);
    }

    #[test]
    fn selector_message_is_verbatim() {
        let err = ScrapeError::from(SelectorError {
            selector: "h3[".into(),
            message: "Unexpected end of input".into(),
        });
        let failure = ScrapeFailure::from(err);
        assert_eq!(failure.kind, FailureKind::Selector);
        assert_eq!(failure.message, "Unexpected end of input");
    }

    #[test]
    fn missing_input_uses_validator_message() {
        assert_eq!(ScrapeError::MissingInput.to_string(), MISSING_INPUT_MESSAGE);
    }
}
