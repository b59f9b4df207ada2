pub mod cli;
pub mod error;
pub mod format;
pub mod lexer;

pub use error::{Error, Result};
pub use format::{Category, ClassMap, Highlighter, highlight};

#[cfg(test)]
mod tests;
