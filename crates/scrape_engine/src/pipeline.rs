use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use scrape_core::{ScrapeOutcome, ScrapeRequest};

use crate::relay::{effective_url, RelayConfig};
use crate::{CssTextExtractor, Extractor, FetchError, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{InFlightSlot, ScrapeError};

/// Validate -> fetch -> extract -> classify, for one request at a time.
pub struct ScrapePipeline {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    relay: RelayConfig,
    slot: InFlightSlot,
}

impl ScrapePipeline {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn Extractor>, relay: RelayConfig) -> Self {
        Self {
            fetcher,
            extractor,
            relay,
            slot: InFlightSlot::new(),
        }
    }

    /// Pipeline backed by reqwest and the CSS text extractor.
    pub fn with_settings(settings: &FetchSettings, relay: RelayConfig) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(CssTextExtractor),
            relay,
        ))
    }

    pub fn relay(&self) -> &RelayConfig {
        &self.relay
    }

    pub fn in_flight(&self) -> &InFlightSlot {
        &self.slot
    }

    /// Runs one invocation. Every failure is folded into `ScrapeOutcome::Failure`.
    pub async fn run(&self, request: &ScrapeRequest) -> ScrapeOutcome {
        match self.try_run(request).await {
            Ok(texts) => {
                let outcome = ScrapeOutcome::classify(texts);
                match &outcome {
                    ScrapeOutcome::Values(values) => engine_info!(
                        "scrape of {} with {:?} matched {} element(s)",
                        request.target_url,
                        request.selector,
                        values.len()
                    ),
                    _ => engine_info!(
                        "scrape of {} with {:?} matched nothing",
                        request.target_url,
                        request.selector
                    ),
                }
                outcome
            }
            Err(err) => {
                match &err {
                    ScrapeError::Transport { detail, .. } => {
                        engine_warn!("scrape of {} failed: {}", request.target_url, detail)
                    }
                    other => engine_warn!("scrape of {} failed: {}", request.target_url, other),
                }
                ScrapeOutcome::Failure(err.into())
            }
        }
    }

    async fn try_run(&self, request: &ScrapeRequest) -> Result<Vec<String>, ScrapeError> {
        request.validate().map_err(|_| ScrapeError::MissingInput)?;
        let _token = self.slot.try_acquire().ok_or(ScrapeError::Busy)?;

        let url = effective_url(request, &self.relay);
        engine_debug!("fetching {} (relay: {})", url, request.use_relay);
        let page = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|err| ScrapeError::from_fetch(err, request.use_relay))?;

        engine_debug!(
            "extracting {:?} from {} chars of {}",
            request.selector,
            page.html.len(),
            page.final_url
        );
        let texts = self.extractor.extract(&page.html, &request.selector)?;
        Ok(texts)
    }
}
