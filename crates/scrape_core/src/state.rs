use std::time::Duration;

use crate::view_model::{AppViewModel, ResultView};
use crate::{find_preset, validate_input, ScrapeOutcome, ScrapeRequest};

pub type InvocationId = u64;

/// How long the copy label shows its confirmation or failure text.
pub const COPY_LABEL_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Ready,
    Copied,
    Failed,
}

impl CopyLabel {
    pub fn text(self) -> &'static str {
        match self {
            CopyLabel::Ready => "Copy",
            CopyLabel::Copied => "Copied!",
            CopyLabel::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url: String,
    selector: String,
    use_relay: bool,
    selected_preset: Option<&'static str>,
    outcome: Option<ScrapeOutcome>,
    copy_label: CopyLabel,
    copy_generation: u64,
    in_flight: Option<InvocationId>,
    next_invocation: InvocationId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url: String::new(),
            selector: String::new(),
            use_relay: true,
            selected_preset: None,
            outcome: None,
            copy_label: CopyLabel::Ready,
            copy_generation: 0,
            in_flight: None,
            next_invocation: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a configured relay default instead of "on".
    pub fn with_relay(use_relay: bool) -> Self {
        Self {
            use_relay,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let result = match &self.outcome {
            None | Some(ScrapeOutcome::Failure(_)) => None,
            Some(ScrapeOutcome::Empty) => Some(ResultView::NoMatches),
            Some(ScrapeOutcome::Values(values)) => Some(ResultView::Rows(values.clone())),
        };
        let error = match &self.outcome {
            Some(ScrapeOutcome::Failure(failure)) => Some(failure.message.clone()),
            _ => None,
        };
        let show_copy = matches!(result, Some(ResultView::Rows(_)));
        let loading = self.in_flight.is_some();
        AppViewModel {
            url: self.url.clone(),
            selector: self.selector.clone(),
            use_relay: self.use_relay,
            selected_preset: self.selected_preset,
            selector_editable: !loading && self.selected_preset.is_none(),
            loading,
            error,
            result,
            copy_label: show_copy.then_some(self.copy_label),
            dirty: self.dirty,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn outcome(&self) -> Option<&ScrapeOutcome> {
        self.outcome.as_ref()
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.mark_dirty();
        }
    }

    /// No-op while a preset owns the selector field.
    pub(crate) fn set_selector(&mut self, selector: String) {
        if self.selected_preset.is_none() && self.selector != selector {
            self.selector = selector;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_relay(&mut self, use_relay: bool) {
        if self.use_relay != use_relay {
            self.use_relay = use_relay;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_preset(&mut self, label: &str) {
        if self.selected_preset == Some(label) {
            self.selected_preset = None;
            self.selector.clear();
            self.mark_dirty();
            return;
        }
        if let Some(preset) = find_preset(label) {
            self.selected_preset = Some(preset.label);
            self.selector = preset.selector.to_string();
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_form(&mut self) {
        self.url.clear();
        self.selector.clear();
        self.selected_preset = None;
        self.outcome = None;
        self.reset_copy_label();
        self.mark_dirty();
    }

    /// Clears the previous outcome, validates and claims the in-flight slot.
    /// Returns the request to run, or `None` if validation failed.
    pub(crate) fn begin_invocation(&mut self) -> Option<(InvocationId, ScrapeRequest)> {
        self.outcome = None;
        self.reset_copy_label();
        self.mark_dirty();

        if let Err(failure) = validate_input(&self.url, &self.selector) {
            self.outcome = Some(ScrapeOutcome::Failure(failure));
            return None;
        }

        let invocation = self.next_invocation;
        self.next_invocation += 1;
        self.in_flight = Some(invocation);
        Some((
            invocation,
            ScrapeRequest::new(self.url.clone(), self.selector.clone(), self.use_relay),
        ))
    }

    /// Applies the outcome if it belongs to the invocation in flight.
    pub(crate) fn finish_invocation(
        &mut self,
        invocation: InvocationId,
        outcome: ScrapeOutcome,
    ) -> bool {
        if self.in_flight != Some(invocation) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(outcome);
        self.mark_dirty();
        true
    }

    pub(crate) fn copy_text(&self) -> Option<String> {
        self.outcome.as_ref().and_then(ScrapeOutcome::joined)
    }

    /// Shows the copy result and returns the generation a reset timer must match.
    pub(crate) fn set_copy_result(&mut self, copied: bool) -> u64 {
        self.copy_label = if copied {
            CopyLabel::Copied
        } else {
            CopyLabel::Failed
        };
        self.copy_generation += 1;
        self.mark_dirty();
        self.copy_generation
    }

    pub(crate) fn expire_copy_label(&mut self, generation: u64) {
        if generation == self.copy_generation && self.copy_label != CopyLabel::Ready {
            self.copy_label = CopyLabel::Ready;
            self.mark_dirty();
        }
    }

    fn reset_copy_label(&mut self) {
        self.copy_label = CopyLabel::Ready;
        // Invalidate any pending reset timer.
        self.copy_generation += 1;
    }
}
