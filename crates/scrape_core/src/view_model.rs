use crate::CopyLabel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Informational paragraph, not an error.
    NoMatches,
    /// One table row per extracted text.
    Rows(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub url: String,
    pub selector: String,
    pub use_relay: bool,
    pub selected_preset: Option<&'static str>,
    pub selector_editable: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
    /// Present only when there are rows to copy.
    pub copy_label: Option<CopyLabel>,
    pub dirty: bool,
}
