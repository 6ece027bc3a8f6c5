use std::sync::Once;

use pretty_assertions::assert_eq;
use scrape_core::{
    update, AppState, Effect, FailureKind, Msg, ResultView, ScrapeOutcome, ScrapeRequest,
    MISSING_INPUT_MESSAGE, NO_MATCHES_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn fill_form(url: &str, selector: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::UrlChanged(url.to_string()));
    let (state, _) = update(state, Msg::SelectorChanged(selector.to_string()));
    state
}

fn start(state: AppState) -> (AppState, u64, ScrapeRequest) {
    let (state, effects) = update(state, Msg::ScrapeClicked);
    match effects.as_slice() {
        [Effect::StartScrape {
            invocation,
            request,
        }] => (state, *invocation, request.clone()),
        other => panic!("expected a single StartScrape effect, got {other:?}"),
    }
}

#[test]
fn relay_defaults_on() {
    assert!(AppState::new().view().use_relay);
    assert!(!AppState::with_relay(false).view().use_relay);
}

#[test]
fn missing_url_or_selector_issues_no_scrape() {
    init_logging();
    for (url, selector) in [("", "h3"), ("https://example.com", ""), ("", "")] {
        let state = fill_form(url, selector);
        let (mut next, effects) = update(state, Msg::ScrapeClicked);

        assert!(effects.is_empty());
        let view = next.view();
        assert_eq!(view.error.as_deref(), Some(MISSING_INPUT_MESSAGE));
        assert!(!view.loading);
        assert!(next.consume_dirty());
        assert!(matches!(
            next.outcome(),
            Some(ScrapeOutcome::Failure(failure)) if failure.kind == FailureKind::Validation
        ));
    }
}

#[test]
fn scrape_emits_request_built_from_form() {
    init_logging();
    let state = fill_form("https://example.com/jobs", "h3 a");
    let (state, _) = update(state, Msg::RelayToggled(false));
    let (state, invocation, request) = start(state);

    assert_eq!(invocation, 1);
    assert_eq!(
        request,
        ScrapeRequest::new("https://example.com/jobs", "h3 a", false)
    );
    let view = state.view();
    assert!(view.loading);
    assert!(!view.selector_editable);
}

#[test]
fn reentrant_scrape_is_ignored_while_in_flight() {
    init_logging();
    let (mut state, _, _) = start(fill_form("https://example.com", "h3"));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ScrapeClicked);
    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert!(!state.consume_dirty());
}

#[test]
fn form_edits_are_ignored_while_in_flight() {
    init_logging();
    let (state, _, _) = start(fill_form("https://example.com", "h3"));
    let before = state.view();

    let (state, _) = update(state, Msg::UrlChanged("https://other.example".to_string()));
    let (state, _) = update(state, Msg::SelectorChanged("p".to_string()));
    let (state, _) = update(state, Msg::RelayToggled(false));
    let (state, _) = update(state, Msg::PresetClicked("ナース専科".to_string()));
    let (state, _) = update(state, Msg::ClearClicked);

    assert_eq!(state.view(), before);
}

#[test]
fn finished_values_render_rows_and_copy() {
    init_logging();
    let (state, invocation, _) = start(fill_form("https://example.com", "h3 a"));
    let (state, effects) = update(
        state,
        Msg::ScrapeFinished {
            invocation,
            outcome: ScrapeOutcome::classify(["  Job A ", "", "Job B"]),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(
        view.result,
        Some(ResultView::Rows(vec![
            "Job A".to_string(),
            "Job B".to_string()
        ]))
    );
    assert!(view.copy_label.is_some());
}

#[test]
fn finished_empty_shows_info_without_copy() {
    init_logging();
    let (state, invocation, _) = start(fill_form("https://example.com", ".none"));
    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            invocation,
            outcome: ScrapeOutcome::Empty,
        },
    );

    let view = state.view();
    assert_eq!(view.result, Some(ResultView::NoMatches));
    assert_eq!(view.error, None);
    assert_eq!(view.copy_label, None);
    assert!(!NO_MATCHES_MESSAGE.is_empty());
}

#[test]
fn finished_failure_shows_error_only() {
    init_logging();
    let (state, invocation, _) = start(fill_form("https://example.com", "h3"));
    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            invocation,
            outcome: ScrapeOutcome::failure(FailureKind::HttpStatus(500), "status 500"),
        },
    );

    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("status 500"));
    assert_eq!(view.result, None);
    assert_eq!(view.copy_label, None);
}

#[test]
fn stale_completion_is_dropped() {
    init_logging();
    let (mut state, invocation, _) = start(fill_form("https://example.com", "h3"));
    assert!(state.consume_dirty());
    let (mut state, _) = update(
        state,
        Msg::ScrapeFinished {
            invocation: invocation + 41,
            outcome: ScrapeOutcome::Empty,
        },
    );
    assert!(state.is_loading());
    assert!(!state.consume_dirty());
}

#[test]
fn new_invocation_clears_previous_outcome() {
    init_logging();
    let (state, invocation, _) = start(fill_form("https://example.com", "h3"));
    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            invocation,
            outcome: ScrapeOutcome::classify(["x"]),
        },
    );

    let (state, second, _) = start(state);
    assert_eq!(second, invocation + 1);
    let view = state.view();
    assert_eq!(view.result, None);
    assert_eq!(view.error, None);
}

#[test]
fn identical_inputs_yield_identical_requests() {
    init_logging();
    let (state, first, request_a) = start(fill_form("https://example.com", "h3"));
    let (state, _) = update(
        state,
        Msg::ScrapeFinished {
            invocation: first,
            outcome: ScrapeOutcome::Empty,
        },
    );
    let (_, _, request_b) = start(state);
    assert_eq!(request_a, request_b);
}
