use crate::{AppState, Effect, Msg, COPY_LABEL_RESET};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // Inputs are disabled while a scrape is outstanding.
    if state.is_loading() && is_form_input(&msg) {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::SelectorChanged(selector) => {
            state.set_selector(selector);
            Vec::new()
        }
        Msg::RelayToggled(use_relay) => {
            state.set_relay(use_relay);
            Vec::new()
        }
        Msg::PresetClicked(label) => {
            state.toggle_preset(&label);
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear_form();
            Vec::new()
        }
        Msg::ScrapeClicked => match state.begin_invocation() {
            Some((invocation, request)) => vec![Effect::StartScrape {
                invocation,
                request,
            }],
            None => Vec::new(),
        },
        Msg::ScrapeFinished {
            invocation,
            outcome,
        } => {
            state.finish_invocation(invocation, outcome);
            Vec::new()
        }
        Msg::CopyClicked => match state.copy_text() {
            Some(text) => vec![Effect::CopyToClipboard { text }],
            None => Vec::new(),
        },
        Msg::CopyFinished(result) => {
            let generation = state.set_copy_result(result.is_ok());
            vec![Effect::ResetCopyLabelAfter {
                generation,
                delay: COPY_LABEL_RESET,
            }]
        }
        Msg::CopyLabelExpired { generation } => {
            state.expire_copy_label(generation);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_form_input(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::UrlChanged(_)
            | Msg::SelectorChanged(_)
            | Msg::RelayToggled(_)
            | Msg::PresetClicked(_)
            | Msg::ClearClicked
            | Msg::ScrapeClicked
    )
}
