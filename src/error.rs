//! Error type shared by the library and the binary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("random source failed: {0}")]
    RandomSource(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("{}:{line}: {message}", path.display())]
    Config {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
