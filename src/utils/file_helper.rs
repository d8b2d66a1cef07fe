use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::models::ExcludeSet;

/// Lazily yields every file beneath `root`, never entering excluded names.
///
/// The root itself is always visited even if its own name is excluded.
/// Directory symlinks are not followed; file symlinks are yielded.
pub fn walk_files<'a>(
    root: &Path,
    excludes: &'a ExcludeSet,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !excludes.matches_name(entry.file_name()))
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(is_file_entry)
        .map(DirEntry::into_path)
}

fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && entry.path().is_file()
}

/// Whether `path` is a directory; symlinks only count with `follow_links`.
pub fn is_directory(path: &Path, follow_links: bool) -> bool {
    if follow_links {
        return path.is_dir();
    }
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

/// Text-mode newline translation: `\r\n` and lone `\r` become `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Immediate children of a directory, each list in name order.
#[derive(Debug, Default)]
pub struct Children {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

pub fn sorted_children(path: &Path, excludes: &ExcludeSet) -> Children {
    let mut children = Children::default();

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not list directory");
            return children;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| !excludes.matches_name(&entry.file_name()))
        .map(|entry| entry.path())
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for child in paths {
        if is_directory(&child, false) {
            children.dirs.push(child);
        } else if child.is_file() {
            children.files.push(child);
        }
    }

    children
}
