#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL field.
    UrlChanged(String),
    /// User edited the selector field. Ignored while a preset is active.
    SelectorChanged(String),
    /// User toggled the relay checkbox.
    RelayToggled(bool),
    /// User clicked a preset button (by label). Clicking the active preset deselects it.
    PresetClicked(String),
    /// User clicked Clear.
    ClearClicked,
    /// User clicked Scrape.
    ScrapeClicked,
    /// Engine completion for an invocation.
    ScrapeFinished {
        invocation: crate::InvocationId,
        outcome: crate::ScrapeOutcome,
    },
    /// User clicked Copy.
    CopyClicked,
    /// Clipboard write resolved.
    CopyFinished(Result<(), String>),
    /// The copy label timer fired.
    CopyLabelExpired { generation: u64 },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
