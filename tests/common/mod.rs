#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tokentree::formatters::Writer;
use tokentree::models::{ExcludeSet, ScanOptions};
use tokentree::tokenizers::Tokenizer;

/// One token per whitespace-separated word, so fixtures have exact counts.
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn name(&self) -> &str {
        "words"
    }

    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// One token per character, newlines included.
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn name(&self) -> &str {
        "chars"
    }

    fn count(&self, text: &str) -> usize {
        text.chars().count()
    }
}

pub fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

pub fn write_words(root: &Path, rel: &str, n: usize) -> PathBuf {
    write_bytes(root, rel, words(n).as_bytes())
}

pub fn write_bytes(root: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}

pub fn render_with(root: &Path, excludes: ExcludeSet) -> String {
    let options = ScanOptions::new(root).with_excludes(excludes);
    let mut writer = Writer::new(Vec::new());
    tokentree::process_token_tree(&options, &WordTokenizer, false, &mut writer).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

pub fn render(root: &Path) -> String {
    render_with(root, ExcludeSet::with_defaults())
}
