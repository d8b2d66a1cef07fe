use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Token counts keyed by file path.
///
/// Only files that decoded cleanly and produced at least one token are
/// stored; `insert` silently drops zero counts to keep that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCountMap {
    counts: BTreeMap<PathBuf, usize>,
}

impl TokenCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the count was recorded.
    pub fn insert(&mut self, path: PathBuf, token_count: usize) -> bool {
        if token_count == 0 {
            return false;
        }
        self.counts.insert(path, token_count);
        true
    }

    pub fn get(&self, path: &Path) -> Option<usize> {
        self.counts.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.counts.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
