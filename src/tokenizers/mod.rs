use tiktoken_rs::{cl100k_base, o200k_base, p50k_base, p50k_edit, r50k_base, CoreBPE};

use crate::error::{Result, TokenTreeError};

pub const DEFAULT_ENCODING: &str = "cl100k_base";

pub const KNOWN_ENCODINGS: &[&str] = &[
    "cl100k_base",
    "o200k_base",
    "p50k_base",
    "p50k_edit",
    "r50k_base",
    "gpt2",
];

/// Turns text into a number of tokens.
///
/// The scanner only ever needs the count, so implementations are free to
/// skip materialising the token sequence.
pub trait Tokenizer {
    fn name(&self) -> &str;

    fn count(&self, text: &str) -> usize;
}

pub struct TiktokenTokenizer {
    name: String,
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    pub fn new(name: &str) -> Result<Self> {
        let loaded = match name {
            "cl100k_base" => cl100k_base(),
            "o200k_base" => o200k_base(),
            "p50k_base" => p50k_base(),
            "p50k_edit" => p50k_edit(),
            // gpt2 shares the r50k vocabulary
            "r50k_base" | "gpt2" => r50k_base(),
            _ => {
                return Err(TokenTreeError::UnknownEncoding {
                    name: name.to_string(),
                    known: KNOWN_ENCODINGS.join(", "),
                })
            }
        };

        let bpe = loaded.map_err(|e| TokenTreeError::Tokenizer {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            bpe,
        })
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn count(&self, text: &str) -> usize {
        // Special-token markup is counted as plain text
        self.bpe.encode_ordinary(text).len()
    }
}

pub fn make_tokenizer(name: &str) -> Result<Box<dyn Tokenizer>> {
    Ok(Box::new(TiktokenTokenizer::new(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_encoding_is_rejected() {
        let err = make_tokenizer("not_an_encoding").err().unwrap();
        match err {
            TokenTreeError::UnknownEncoding { name, known } => {
                assert_eq!(name, "not_an_encoding");
                assert!(known.contains("cl100k_base"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gpt2_alias_reports_its_own_name() {
        let tokenizer = make_tokenizer("gpt2").unwrap();
        assert_eq!(tokenizer.name(), "gpt2");
    }
}
