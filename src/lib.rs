use anyhow::{Context, Result};
use std::io::Write;

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod formatters;
pub mod models;
pub mod scanner;
pub mod tokenizers;
pub mod utils;

use crate::formatters::{render_report, Writer};
use crate::models::ScanOptions;
use crate::tokenizers::Tokenizer;

/// Scans `options.root` and writes the full report.
///
/// The root must already exist; callers decide how to report a missing one.
pub fn process_token_tree<W: Write>(
    options: &ScanOptions,
    tokenizer: &dyn Tokenizer,
    show_progress: bool,
    writer: &mut Writer<W>,
) -> Result<()> {
    let report = scanner::scan(options, tokenizer, show_progress);
    render_report(&report, &options.root, &options.excludes, writer)
        .context("failed to write report")
}

pub fn run(cli: &cli::Cli) -> Result<()> {
    let options = cli.scan_options();
    let tokenizer = tokenizers::make_tokenizer(&cli.encoding)?;
    let mut writer = Writer::stdout();
    process_token_tree(&options, tokenizer.as_ref(), cli.progress, &mut writer)
}
