use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::LogDestination;

/// Extract the text of every element matching a CSS selector on a web page.
///
/// Without `--url` an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Page to scrape (one-shot mode)
    #[arg(short, long)]
    pub url: Option<String>,

    /// CSS selector to evaluate
    #[arg(short, long, conflicts_with = "preset")]
    pub selector: Option<String>,

    /// Use a built-in selector preset, by label or 1-based index
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Fetch the page directly instead of through the CORS relay
    #[arg(long)]
    pub no_relay: bool,

    /// Copy the extracted texts to the clipboard, one per line
    #[arg(long)]
    pub copy: bool,

    /// RON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl LogTarget {
    pub fn destination(self) -> LogDestination {
        match self {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::default_file(),
            LogTarget::Both => LogDestination::Both(engine_logging::DEFAULT_LOG_FILE.into()),
            LogTarget::Off => LogDestination::Off,
        }
    }
}
