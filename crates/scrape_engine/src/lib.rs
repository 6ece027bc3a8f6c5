//! Scrape engine: fetch, decode and extract pipeline plus its background runner.
mod decode;
mod engine;
mod error;
mod extract;
mod fetch;
mod guard;
mod pipeline;
mod relay;

pub use decode::{decode_html, DecodedHtml};
pub use engine::{EngineConfig, EngineError, EngineEvent, EngineHandle};
pub use error::ScrapeError;
pub use extract::{CssTextExtractor, Extractor, SelectorError};
pub use fetch::{FetchError, FetchSettings, FetchedPage, Fetcher, ReqwestFetcher};
pub use guard::{InFlightSlot, InFlightToken};
pub use pipeline::ScrapePipeline;
pub use relay::{
    effective_url, encode_component, RelayConfig, RelayTemplateError, DEFAULT_RELAY_TEMPLATE,
    URL_PLACEHOLDER,
};
