//! Scrape core: pure state machine, data model and view-model helpers.
mod effect;
mod msg;
mod outcome;
mod preset;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use outcome::{FailureKind, ScrapeFailure, ScrapeOutcome, NO_MATCHES_MESSAGE};
pub use preset::{find_preset, Preset, PRESETS};
pub use request::{validate_input, ScrapeRequest, MISSING_INPUT_MESSAGE};
pub use state::{AppState, CopyLabel, InvocationId, COPY_LABEL_RESET};
pub use update::update;
pub use view_model::{AppViewModel, ResultView};
