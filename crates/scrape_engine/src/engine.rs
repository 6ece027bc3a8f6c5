use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::engine_debug;
use scrape_core::{InvocationId, ScrapeOutcome, ScrapeRequest};
use thiserror::Error;

use crate::{FetchError, FetchSettings, RelayConfig, ScrapePipeline};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub relay: RelayConfig,
    pub fetch: FetchSettings,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ScrapeCompleted {
        invocation: InvocationId,
        outcome: ScrapeOutcome,
    },
}

enum EngineCommand {
    Scrape {
        invocation: InvocationId,
        request: ScrapeRequest,
    },
}

/// Owns a background thread with a Tokio runtime that runs scrape commands.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let pipeline = ScrapePipeline::with_settings(&config.fetch, config.relay)?;
        Ok(Self::with_pipeline(pipeline)?)
    }

    pub fn with_pipeline(pipeline: ScrapePipeline) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let pipeline = Arc::new(pipeline);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("scrape-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let pipeline = pipeline.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(pipeline.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn scrape(&self, invocation: InvocationId, request: ScrapeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Scrape {
            invocation,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    pipeline: &ScrapePipeline,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Scrape {
            invocation,
            request,
        } => {
            engine_debug!("invocation {} started", invocation);
            let outcome = pipeline.run(&request).await;
            let _ = event_tx.send(EngineEvent::ScrapeCompleted {
                invocation,
                outcome,
            });
        }
    }
}
