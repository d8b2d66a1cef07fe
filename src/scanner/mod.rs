use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{ScanOptions, ScanReport};
use crate::tokenizers::Tokenizer;
use crate::utils::{normalize_newlines, walk_files};

/// Outcome of counting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCount {
    Tokens(usize),
    /// Content was not valid UTF-8.
    Skipped(String),
}

/// Reads `path` in full and counts its tokens.
///
/// Invalid UTF-8 is reported as [`FileCount::Skipped`]; any other read
/// failure is returned as [`TokenTreeError::Io`](crate::error::TokenTreeError::Io)
/// for the caller to account for.
pub fn count_file(path: &Path, tokenizer: &dyn Tokenizer) -> Result<FileCount> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(FileCount::Tokens(tokenizer.count(&normalize_newlines(text)))),
        Err(_) => Ok(FileCount::Skipped(format!(
            "Skipping '{}' due to a UTF-8 decode error.",
            path.display()
        ))),
    }
}

/// Walks the tree under `options.root` and counts every file once.
pub fn scan(options: &ScanOptions, tokenizer: &dyn Tokenizer, show_progress: bool) -> ScanReport {
    let mut report = ScanReport::new();
    let start_time = Instant::now();

    let progress = if show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    } else {
        ProgressBar::hidden()
    };
    progress.set_message("Scanning directories...");

    let mut seen = 0usize;
    for file_path in walk_files(&options.root, &options.excludes) {
        seen += 1;
        if seen % 100 == 0 {
            progress.set_message(format!("Counted {} files", seen));
        }

        match count_file(&file_path, tokenizer) {
            Ok(FileCount::Tokens(token_count)) => {
                if token_count == 0 {
                    debug!(path = %file_path.display(), "file has no tokens");
                }
                report.add_file(file_path, token_count);
            }
            Ok(FileCount::Skipped(reason)) => {
                debug!("{}", reason);
                report.add_skipped();
            }
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "could not read file");
                report.add_unreadable();
            }
        }
    }

    progress.finish_and_clear();

    report.set_duration(start_time.elapsed().as_millis());
    info!(
        files = seen,
        counted = report.token_counts.len(),
        skipped = report.skipped,
        unreadable = report.unreadable,
        tokens = report.total_tokens(),
        encoding = tokenizer.name(),
        duration_ms = report.duration_ms as u64,
        "scan complete"
    );

    report
}
