use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use scrape_core::{Effect, Msg};
use scrape_engine::{EngineEvent, EngineHandle};

/// Plain-text clipboard writes.
pub trait Clipboard: Send + Sync {
    fn write(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), String> {
        cli_clipboard::set_contents(text.to_string()).map_err(|err| err.to_string())
    }
}

/// Executes effects; completions come back as messages on `msg_tx`.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Arc<dyn Clipboard>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Arc<dyn Clipboard>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartScrape {
                    invocation,
                    request,
                } => {
                    engine_info!(
                        "StartScrape invocation={} url={} selector={:?} relay={}",
                        invocation,
                        request.target_url,
                        request.selector,
                        request.use_relay
                    );
                    self.engine.scrape(invocation, request);
                }
                Effect::CopyToClipboard { text } => {
                    let clipboard = self.clipboard.clone();
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        let result = clipboard.write(&text);
                        match &result {
                            Ok(()) => engine_debug!("copied {} bytes to clipboard", text.len()),
                            Err(err) => engine_warn!("failed to copy text: {}", err),
                        }
                        let _ = msg_tx.send(Msg::CopyFinished(result));
                    });
                }
                Effect::ResetCopyLabelAfter { generation, delay } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::CopyLabelExpired { generation });
                    });
                }
            }
        }
    }

    /// Drains finished scrapes from the engine.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::ScrapeCompleted {
                    invocation,
                    outcome,
                } => msgs.push(Msg::ScrapeFinished {
                    invocation,
                    outcome,
                }),
            }
        }
        msgs
    }
}
