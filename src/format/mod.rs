//! Highlight Go source as HTML.
//!
//! The pipeline is split into small stages: segmenting turns source + tokens
//! into gap-free runs, classification gives each run a visual category,
//! themes map categories to CSS classes, and rendering escapes and wraps
//! the runs. The highlighter composes them.

mod classify;
mod highlight;
mod render;
mod segment;
mod theme;

pub use classify::{classify, kind_category, segment_category};
pub use highlight::{Highlighter, highlight};
pub use render::{escape, escape_into, render, render_into};
pub use segment::{Segment, segment};
pub use theme::{Category, ClassMap};
