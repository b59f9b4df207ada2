//! Syntax highlighting: tokenize source, build classified segments, emit HTML.

use super::classify::classify;
use super::render::render;
use super::segment::segment;
use super::theme::ClassMap;
use crate::error::Error;
use crate::lexer::{Lexer, Token};

/// Highlighter with a fixed class mapping. Holds no other state, so one
/// instance can serve any number of threads; each call gets its own lexer.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    classes: ClassMap,
}

impl Highlighter {
    #[must_use]
    pub fn new(classes: ClassMap) -> Self {
        Highlighter { classes }
    }

    #[must_use]
    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }

    /// Highlight Go source.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
    pub fn highlight(&self, source: &str) -> Result<String, Error> {
        let tokens = Lexer::new(source).tokenize();
        tracing::trace!(tokens = tokens.len(), "lexed source");
        self.highlight_tokens(source, &tokens)
    }

    /// Highlight `source` from a token stream produced elsewhere. Offsets
    /// that are unsorted, shared, or outside the source are tolerated.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len(), tokens = tokens.len()))]
    pub fn highlight_tokens(&self, source: &str, tokens: &[Token]) -> Result<String, Error> {
        let mut segments = segment(source, tokens);
        classify(&mut segments);
        render(&segments, &self.classes)
    }
}

/// Highlight Go source with the default class names.
pub fn highlight(source: &str) -> Result<String, Error> {
    Highlighter::default().highlight(source)
}
