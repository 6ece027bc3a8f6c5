use std::fmt;

pub const NO_MATCHES_MESSAGE: &str = "no elements matched the selector";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    InvalidUrl,
    HttpStatus(u16),
    Transport,
    Selector,
    Busy,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Selector => write!(f, "selector"),
            FailureKind::Busy => write!(f, "busy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ScrapeFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ScrapeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one scrape invocation.
///
/// `Values` is only produced by [`ScrapeOutcome::classify`], which guarantees a
/// non-empty list of trimmed, non-blank strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Empty,
    Values(Vec<String>),
    Failure(ScrapeFailure),
}

impl ScrapeOutcome {
    /// Trims every text, drops blanks and picks `Empty` or `Values`.
    pub fn classify<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = texts
            .into_iter()
            .map(|text| text.as_ref().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        if values.is_empty() {
            ScrapeOutcome::Empty
        } else {
            ScrapeOutcome::Values(values)
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        ScrapeOutcome::Failure(ScrapeFailure::new(kind, message))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ScrapeOutcome::Failure(_))
    }

    pub fn values(&self) -> Option<&[String]> {
        match self {
            ScrapeOutcome::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Newline-joined values, as placed on the clipboard.
    pub fn joined(&self) -> Option<String> {
        self.values().map(|values| values.join("\n"))
    }
}

impl From<ScrapeFailure> for ScrapeOutcome {
    fn from(failure: ScrapeFailure) -> Self {
        ScrapeOutcome::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_trims_and_filters_in_order() {
        let outcome = ScrapeOutcome::classify(["  Job A ", "", "\n\t", "Job B"]);
        assert_eq!(
            outcome,
            ScrapeOutcome::Values(vec!["Job A".to_string(), "Job B".to_string()])
        );
    }

    #[test]
    fn classify_blank_only_is_empty() {
        assert_eq!(ScrapeOutcome::classify(["", "   "]), ScrapeOutcome::Empty);
        assert_eq!(
            ScrapeOutcome::classify(Vec::<String>::new()),
            ScrapeOutcome::Empty
        );
    }

    #[test]
    fn classify_trims_ideographic_space() {
        let outcome = ScrapeOutcome::classify(["\u{3000}看護師\u{3000}"]);
        assert_eq!(outcome.values(), Some(&["看護師".to_string()][..]));
    }

    #[test]
    fn joined_uses_newlines() {
        let outcome = ScrapeOutcome::classify(["a", "b", "c"]);
        assert_eq!(outcome.joined().as_deref(), Some("a\nb\nc"));
        assert_eq!(ScrapeOutcome::Empty.joined(), None);
    }
}
