/// Error types for the tokentree crate.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenTreeError {
    #[error("Unknown encoding: {name} (known encodings: {known})")]
    UnknownEncoding { name: String, known: String },

    #[error("Failed to initialize tokenizer '{name}': {reason}")]
    Tokenizer { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TokenTreeError>;
