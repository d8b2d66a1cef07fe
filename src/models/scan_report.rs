use std::path::PathBuf;

use super::{ExcludeSet, TokenCountMap};

/// What to scan and what to leave out.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub excludes: ExcludeSet,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excludes: ExcludeSet::with_defaults(),
        }
    }

    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }
}

/// Result of the scan phase; read-only from here on.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub token_counts: TokenCountMap,
    /// Files that were not valid UTF-8.
    pub skipped: usize,
    /// Files that could not be read at all.
    pub unreadable: usize,
    // Duration in milliseconds
    pub duration_ms: u128,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: PathBuf, token_count: usize) {
        self.token_counts.insert(path, token_count);
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn add_unreadable(&mut self) {
        self.unreadable += 1;
    }

    pub fn set_duration(&mut self, duration_ms: u128) {
        self.duration_ms = duration_ms;
    }

    pub fn total_tokens(&self) -> usize {
        self.token_counts.total()
    }
}
