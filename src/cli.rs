use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::models::{ExcludeSet, ScanOptions};
use crate::tokenizers::DEFAULT_ENCODING;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tokentree",
    about = "Get token count for every file in a directory",
    version
)]
pub struct Cli {
    /// Directory containing the files
    pub directory: PathBuf,

    /// Encoding name
    #[arg(long = "encoding", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Additional file or directory name to exclude (exact name match)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Do not exclude .git and venv by default
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Show a spinner on stderr while scanning
    #[arg(long = "progress")]
    pub progress: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn excludes(&self) -> ExcludeSet {
        let mut excludes = if self.no_default_excludes {
            ExcludeSet::new()
        } else {
            ExcludeSet::with_defaults()
        };
        for name in &self.exclude {
            excludes.insert(name.clone());
        }
        excludes
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(self.directory.clone()).with_excludes(self.excludes())
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
