use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use readlater_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(author, version, about = "Save pages to your read-later library")]
pub struct Cli {
    /// RON configuration file
    #[arg(short, long, default_value = "readlater.ron")]
    pub config: PathBuf,
    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,
    /// Override the auth token
    #[arg(long)]
    pub token: Option<String>,
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,
    /// Log file used by the `file` and `both` targets
    #[arg(long, default_value = "readlater.log")]
    pub log_file: PathBuf,
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Logging is set up from flags alone so config loading is logged too.
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Let the server fetch and save a URL
    SaveUrl {
        url: String,
        /// Poll the saving request until it finishes
        #[arg(short, long)]
        wait: bool,
    },
    /// Save page content captured locally, or a previously uploaded file
    SavePage(SavePage),
    /// Look up the status of a saving request
    Status {
        job_id: String,
        /// Keep polling until the request finishes
        #[arg(short, long)]
        wait: bool,
    },
    /// Edit the reader preferences and print the result
    Prefs(Prefs),
}

#[derive(Debug, Args)]
pub struct SavePage {
    /// The page URL
    #[arg(long)]
    pub url: String,
    /// File holding the captured HTML
    #[arg(long)]
    pub html_file: Option<PathBuf>,
    /// The page title
    #[arg(long)]
    pub title: Option<String>,
    /// Id of an already uploaded file to save instead of HTML
    #[arg(long)]
    pub upload_file_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct Prefs {
    #[arg(long)]
    pub font_size: Option<u32>,
    #[arg(long)]
    pub line_height: Option<u32>,
    /// Maximum reading width in percent
    #[arg(long)]
    pub max_width: Option<u32>,
    #[arg(long)]
    pub theme: Option<String>,
    /// Font family by display name, e.g. "Open Sans"
    #[arg(long)]
    pub font: Option<String>,
    #[arg(long)]
    pub high_contrast: Option<bool>,
    /// Close without applying the edits
    #[arg(long)]
    pub dismiss: bool,
}
