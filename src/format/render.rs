//! Serialize classified segments into an HTML fragment.

use std::fmt::{self, Write};

use super::segment::Segment;
use super::theme::ClassMap;
use crate::error::Error;

const CODE_OPEN: &str = "<pre><code class=\"golang\">";
const CODE_CLOSE: &str = "</code></pre>";

fn entity(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&#34;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Write `text` with the five HTML-significant characters replaced by entities.
pub fn escape_into<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        if let Some(entity) = entity(b) {
            out.write_str(&text[last..i])?;
            out.write_str(entity)?;
            last = i + 1;
        }
    }
    out.write_str(&text[last..])
}

#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        if let Some(entity) = entity(b) {
            out.push_str(&text[last..i]);
            out.push_str(entity);
            last = i + 1;
        }
    }
    out.push_str(&text[last..]);
    out
}

fn write_segment<W: Write>(out: &mut W, segment: &Segment<'_>, classes: &ClassMap) -> fmt::Result {
    let class = segment.category.map_or("", |c| classes.class(c));
    if class.is_empty() {
        return escape_into(out, segment.text);
    }
    out.write_str("<span class=\"")?;
    escape_into(out, class)?;
    out.write_str("\">")?;
    escape_into(out, segment.text)?;
    out.write_str("</span>")
}

/// Render segments, in order, into `out`.
pub fn render_into<W: Write>(out: &mut W, segments: &[Segment<'_>], classes: &ClassMap) -> Result<(), Error> {
    out.write_str(CODE_OPEN)?;
    for segment in segments {
        write_segment(out, segment, classes)?;
    }
    out.write_str(CODE_CLOSE)?;
    Ok(())
}

/// Render segments into a fresh string. Deterministic for identical input.
pub fn render(segments: &[Segment<'_>], classes: &ClassMap) -> Result<String, Error> {
    let text_len: usize = segments.iter().map(|s| s.text.len()).sum();
    // rough span overhead
    let mut out = String::with_capacity(CODE_OPEN.len() + CODE_CLOSE.len() + text_len + segments.len() * 24);
    render_into(&mut out, segments, classes)?;
    Ok(out)
}
