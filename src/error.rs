use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the highlighter and the `litebrite` binary.
///
/// Token-level anomalies never show up here: unknown kinds and bad offsets
/// degrade to unstyled text instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing markup into the output buffer failed.
    #[error("failed to render markup: {0}")]
    Render(#[from] fmt::Error),

    #[error("invalid class mapping: {0}")]
    Config(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
