use std::path::Path;

use crate::models::{ExcludeSet, TokenCountMap};
use crate::utils::{is_directory, sorted_children, walk_files, Children};

/// Folder totals and pruning decisions over a finished [`TokenCountMap`].
///
/// Every query walks the filesystem again; nothing is cached between calls.
pub struct Aggregator<'a> {
    counts: &'a TokenCountMap,
    excludes: &'a ExcludeSet,
}

impl<'a> Aggregator<'a> {
    pub fn new(counts: &'a TokenCountMap, excludes: &'a ExcludeSet) -> Self {
        Self { counts, excludes }
    }

    pub fn file_tokens(&self, path: &Path) -> Option<usize> {
        self.counts.get(path)
    }

    /// Sum of the counts of every file nested under `path`.
    pub fn folder_tokens(&self, path: &Path) -> usize {
        walk_files(path, self.excludes)
            .filter_map(|file| self.counts.get(&file))
            .sum()
    }

    /// Whether `path` or anything beneath it has a recorded count.
    ///
    /// `path` itself may be a directory symlink; nested ones are not entered.
    pub fn has_counted_files(&self, path: &Path) -> bool {
        self.counted_below(path, true)
    }

    fn counted_below(&self, path: &Path, follow_links: bool) -> bool {
        if self.counts.contains(path) {
            return true;
        }
        if !is_directory(path, follow_links) {
            return false;
        }
        let Children { dirs, files } = self.children(path);
        files.iter().any(|f| self.counts.contains(f))
            || dirs.iter().any(|d| self.counted_below(d, false))
    }

    pub fn children(&self, path: &Path) -> Children {
        sorted_children(path, self.excludes)
    }
}
