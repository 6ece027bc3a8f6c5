use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use log::LevelFilter;
use scrape_core::{update, AppState, CopyLabel, Msg, ScrapeOutcome};
use scrape_engine::EngineHandle;

use crate::cli::Args;
use crate::commands::{self, Command};
use crate::config::AppConfig;
use crate::effects::{Clipboard, EffectRunner, SystemClipboard};
use crate::render;

const TICK: Duration = Duration::from_millis(75);
const COPY_WAIT: Duration = Duration::from_secs(5);

pub fn run(args: Args) -> Result<ExitCode> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    engine_logging::initialize(args.log.destination(), level);

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let engine = EngineHandle::new(config.engine_config()?).context("starting scrape engine")?;
    let use_relay = config.relay_enabled && !args.no_relay;
    let mut app = App::new(
        engine,
        Arc::new(SystemClipboard),
        AppState::with_relay(use_relay),
    );

    match args.url {
        Some(url) => {
            let preset = args
                .preset
                .as_deref()
                .map(commands::resolve_preset)
                .transpose()?;
            let input = OneShot {
                url,
                selector: args.selector.unwrap_or_default(),
                preset,
                copy: args.copy,
            };
            Ok(app.run_once(input, &mut io::stdout()))
        }
        None => {
            app.run_interactive()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

pub struct OneShot {
    pub url: String,
    pub selector: String,
    pub preset: Option<&'static str>,
    pub copy: bool,
}

pub struct App {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl App {
    pub fn new(engine: EngineHandle, clipboard: Arc<dyn Clipboard>, state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state,
            effects: EffectRunner::new(engine, clipboard, msg_tx),
            msg_rx,
        }
    }

    /// Applies one message and runs its effects. Returns whether a redraw is due.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        self.state = state;
        self.effects.run(effects);
        dirty
    }

    /// Feeds pending completions into the state machine.
    fn pump(&mut self, wait: Duration) -> bool {
        let mut inbox = self.effects.poll_engine();
        if inbox.is_empty() {
            if let Ok(msg) = self.msg_rx.recv_timeout(wait) {
                inbox.push(msg);
            }
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        let mut dirty = false;
        for msg in inbox {
            dirty |= self.dispatch(msg);
        }
        dirty
    }

    fn wait_until_idle(&mut self) {
        while self.state.is_loading() {
            self.pump(TICK);
        }
    }

    pub fn run_once(&mut self, input: OneShot, out: &mut impl Write) -> ExitCode {
        self.dispatch(Msg::UrlChanged(input.url));
        match input.preset {
            Some(label) => self.dispatch(Msg::PresetClicked(label.to_string())),
            None => self.dispatch(Msg::SelectorChanged(input.selector)),
        };
        self.dispatch(Msg::ScrapeClicked);
        self.wait_until_idle();

        if input.copy && self.state.outcome().and_then(ScrapeOutcome::values).is_some() {
            self.dispatch(Msg::CopyClicked);
            let deadline = Instant::now() + COPY_WAIT;
            while self.state.view().copy_label == Some(CopyLabel::Ready)
                && Instant::now() < deadline
            {
                self.pump(TICK);
            }
        }

        let _ = write!(out, "{}", render::render(&self.state.view()));
        match self.state.outcome() {
            Some(ScrapeOutcome::Failure(_)) | None => ExitCode::FAILURE,
            Some(_) => ExitCode::SUCCESS,
        }
    }

    pub fn run_interactive(&mut self) -> io::Result<()> {
        let (line_tx, line_rx) = mpsc::channel::<String>();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        let mut out = io::stdout();
        writeln!(out, "{}\n", render::HELP)?;
        write!(out, "{}", render::render(&self.state.view()))?;
        prompt(&mut out)?;

        loop {
            match line_rx.recv_timeout(TICK) {
                Ok(line) => match commands::parse(&line) {
                    Ok(None) => prompt(&mut out)?,
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => {
                        self.handle_command(command, &mut out)?;
                        prompt(&mut out)?;
                    }
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        prompt(&mut out)?;
                    }
                },
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                // Input closed: let an outstanding scrape finish so its result is shown.
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    if self.state.is_loading() {
                        self.wait_until_idle();
                        write!(out, "\n{}", render::render(&self.state.view()))?;
                    }
                    break;
                }
            }

            if self.pump(Duration::ZERO) {
                write!(out, "\n{}", render::render(&self.state.view()))?;
                prompt(&mut out)?;
            }
        }
        engine_info!("interactive session ended");
        Ok(())
    }

    fn handle_command(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Update(msg) => {
                let ignored = self.state.is_loading() && !matches!(msg, Msg::CopyClicked);
                if ignored {
                    engine_warn!("input ignored while a scrape is in progress: {:?}", msg);
                    writeln!(out, "busy: a scrape is in progress")?;
                    return Ok(());
                }
                if self.dispatch(msg) {
                    write!(out, "{}", render::render(&self.state.view()))?;
                }
            }
            Command::Presets => {
                write!(out, "{}", render::render_presets(self.state.view().selected_preset))?
            }
            Command::Show => write!(out, "{}", render::render(&self.state.view()))?,
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::Quit => {}
        }
        out.flush()
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
