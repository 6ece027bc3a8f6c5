use scraper::{Html, Selector};
use thiserror::Error;

/// Selector syntax rejected by the parser; `message` is the parser's own text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SelectorError {
    pub selector: String,
    pub message: String,
}

pub trait Extractor: Send + Sync {
    /// Texts of every element matching `selector`, in document order.
    /// Each text is trimmed and blank texts are dropped.
    fn extract(&self, html: &str, selector: &str) -> Result<Vec<String>, SelectorError>;
}

/// Tolerant HTML parse plus CSS selector evaluation, reading `textContent`-style text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssTextExtractor;

impl Extractor for CssTextExtractor {
    fn extract(&self, html: &str, selector: &str) -> Result<Vec<String>, SelectorError> {
        let selector_parsed = Selector::parse(selector).map_err(|err| SelectorError {
            selector: selector.to_string(),
            message: err.to_string(),
        })?;
        let doc = Html::parse_document(html);

        Ok(doc
            .select(&selector_parsed)
            .map(|element| element.text().collect::<String>())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect())
    }
}
