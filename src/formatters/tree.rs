use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::Writer;
use crate::aggregator::Aggregator;
use crate::models::{ExcludeSet, ScanReport};
use crate::utils::is_directory;

pub const FOLDER_ICON: &str = "📂";

const GUIDE: &str = "│   ";
const BRANCH: &str = "├── ";

/// Vertical guides for a node at `depth`; the root and its children share
/// the same (empty) prefix.
pub fn guide_prefix(depth: usize) -> String {
    GUIDE.repeat(depth.saturating_sub(1))
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Prints the skipped-file line, a blank line, then the tree rooted at `root`.
pub fn render_report<W: Write>(
    report: &ScanReport,
    root: &Path,
    excludes: &ExcludeSet,
    writer: &mut Writer<W>,
) -> Result<()> {
    writer.write(&format!("Number of skipped files: {}", report.skipped))?;
    writer.write("")?;

    let aggregator = Aggregator::new(&report.token_counts, excludes);
    print_tree(&aggregator, root, 0, writer)?;
    writer.flush()
}

pub fn print_tree<W: Write>(
    aggregator: &Aggregator<'_>,
    path: &Path,
    depth: usize,
    writer: &mut Writer<W>,
) -> Result<()> {
    if !aggregator.has_counted_files(path) {
        return Ok(());
    }

    let prefix = guide_prefix(depth);
    let name = display_name(path);
    // Only the root may be reached through a directory symlink
    let is_dir = is_directory(path, depth == 0);

    if is_dir {
        writer.write(&format!(
            "{}{}{} {} ({} tokens)",
            prefix,
            BRANCH,
            FOLDER_ICON,
            name,
            aggregator.folder_tokens(path)
        ))?;
    }

    if let Some(tokens) = aggregator.file_tokens(path) {
        writer.write(&format!("{}{}{}: {} tokens", prefix, BRANCH, name, tokens))?;
    }

    if !is_dir {
        return Ok(());
    }

    let children = aggregator.children(path);

    // sort_by_key is stable, so equal totals keep name order
    let mut dirs: Vec<_> = children
        .dirs
        .into_iter()
        .map(|dir| {
            let total = aggregator.folder_tokens(&dir);
            (dir, total)
        })
        .collect();
    dirs.sort_by_key(|(_, total)| std::cmp::Reverse(*total));

    let mut files: Vec<_> = children
        .files
        .into_iter()
        .filter_map(|file| aggregator.file_tokens(&file).map(|tokens| (file, tokens)))
        .collect();
    files.sort_by_key(|(_, tokens)| std::cmp::Reverse(*tokens));

    for (dir, _) in &dirs {
        print_tree(aggregator, dir, depth + 1, writer)?;
    }
    for (file, _) in &files {
        print_tree(aggregator, file, depth + 1, writer)?;
    }

    Ok(())
}
