//! Split source into contiguous runs aligned to token boundaries.

use super::theme::Category;
use crate::lexer::{Kind, Token};

/// A contiguous run of source text. Concatenating the `text` of every segment
/// returned by [`segment`] reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub start: usize,
    pub text: &'a str,
    /// Kind of the token that starts here; `None` for text no token covers.
    pub kind: Option<Kind>,
    /// Filled in by the classifier.
    pub category: Option<Category>,
}

impl<'a> Segment<'a> {
    #[must_use]
    pub fn new(start: usize, text: &'a str, kind: Option<Kind>) -> Self {
        Segment { start, text, kind, category: None }
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// (start, end, kind) of a usable token, before clamping to its neighbours.
#[derive(Debug, Clone, Copy)]
struct Mark {
    start: usize,
    end: usize,
    kind: Kind,
}

/// Collect usable token extents in scan order, stopping at `Eof`.
fn marks(source: &str, tokens: &[Token]) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.kind == Kind::Eof {
            break;
        }
        if token.offset >= source.len() || !source.is_char_boundary(token.offset) {
            tracing::debug!(offset = token.offset, kind = ?token.kind, "dropping token outside source");
            continue;
        }
        let end = token.end().min(source.len());
        marks.push(Mark { start: token.offset, end, kind: token.kind });
    }

    if !marks.is_sorted_by_key(|m| m.start) {
        tracing::debug!("token offsets out of order; sorting");
        // Stable, so the first-scanned token still leads each offset group.
        marks.sort_by_key(|m| m.start);
    }
    marks
}

/// Collapse tokens sharing a start offset. The first-scanned kind wins; the
/// widest extent is kept so no text the group covered is orphaned.
fn dedup(marks: Vec<Mark>) -> Vec<Mark> {
    let mut out: Vec<Mark> = Vec::with_capacity(marks.len());
    for mark in marks {
        match out.last_mut() {
            Some(last) if last.start == mark.start => {
                tracing::debug!(offset = mark.start, dropped = ?mark.kind, kept = ?last.kind, "tokens share an offset");
                last.end = last.end.max(mark.end);
            }
            _ => out.push(mark),
        }
    }
    out
}

/// Build the ordered, gap-free segment sequence for `source`.
///
/// Text before the first token and between tokens becomes a kind-less
/// segment. A token's extent is clamped to the next token's start; an empty
/// extent (zero-width token) runs up to the next token instead.
#[must_use]
pub fn segment<'a>(source: &'a str, tokens: &[Token]) -> Vec<Segment<'a>> {
    let marks = dedup(marks(source, tokens));
    let mut segments = Vec::with_capacity(marks.len() * 2 + 1);
    let mut cursor = 0;

    for (i, mark) in marks.iter().enumerate() {
        let next = marks.get(i + 1).map_or(source.len(), |m| m.start);
        if mark.start > cursor {
            segments.push(Segment::new(cursor, &source[cursor..mark.start], None));
        }
        let mut end = mark.end.min(next);
        if end <= mark.start || !source.is_char_boundary(end) {
            end = next;
        }
        segments.push(Segment::new(mark.start, &source[mark.start..end], Some(mark.kind)));
        cursor = end;
    }

    if cursor < source.len() {
        segments.push(Segment::new(cursor, &source[cursor..], None));
    }

    tracing::trace!(tokens = marks.len(), segments = segments.len(), "segmented source");
    segments
}
