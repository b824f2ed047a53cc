//! facet-edit-buffer: document text model and style types for facet-edit.
//!
//! This crate provides the pieces of the highlighting core that deal with
//! text and visual styles rather than tokenization:
//!
//! - [`Document`]: a gap-buffer-backed, line-addressable document with
//!   offset-based insert/delete/replace and dirty-line reporting.
//! - [`DirtyLines`]: the repaint region a mutation or restyle produces.
//! - [`Color`], [`Style`], [`Span`], [`StyledLine`]: immutable value types
//!   describing rendered text, consumed by the external renderer.
//!
//! # Example
//!
//! ```
//! use facet_edit_buffer::{Document, DirtyLines};
//!
//! let mut doc = Document::from_str("hello world");
//! assert_eq!(doc.line_count(), 1);
//!
//! let dirty = doc.insert(5, "\n");
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(doc.line_text(1).unwrap(), " world");
//! ```

mod document;
mod gap_buffer;
mod line_index;
mod style;
mod types;

pub use document::Document;
pub use style::{Color, Span, Style, StyledLine};
pub use types::DirtyLines;
