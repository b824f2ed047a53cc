//! facet-edit-syntax: incremental syntax highlighting for facet-edit.
//!
//! This crate keeps per-line styling continuously correct while the user
//! types, without retokenizing the whole document on every keystroke. Each
//! line records the lexer state it starts with (open comment mode plus the
//! active feature marks); after an edit the core re-tokenizes forward from
//! the edited line and stops at the first line whose recorded state matches
//! the freshly computed one.
//!
//! # Overview
//!
//! The main types are:
//!
//! - [`SyntaxHighlighter`]: Owns the document mirror and all per-line state,
//!   takes edits via `on_insert()` / `on_delete()` / `on_replace()`, and
//!   serves styled lines back to the renderer.
//!
//! - [`LineState`]: The persistent lexer state carried across a line
//!   boundary. One recorded state per line is what makes incremental
//!   re-synchronization possible.
//!
//! - [`Theme`]: Maps token classes and feature marks to concrete styles.
//!
//! # Example
//!
//! ```
//! use facet_edit_syntax::{SyntaxHighlighter, Theme};
//!
//! let mut hl = SyntaxHighlighter::from_text("sig File {}", Theme::classic());
//! hl.on_insert(0, "/* ");
//! // The whole line is now styled as a block comment.
//! let line = hl.styled_line(0);
//! assert_eq!(line.text(), "/* sig File {}");
//! ```

mod highlighter;
mod language;
mod state;
mod theme;
mod tokenizer;

pub use highlighter::{FontMetrics, SyntaxHighlighter};
pub use language::{
    feature_delimiter, is_identifier_char, is_keyword, Polarity, FEATURE_COUNT, KEYWORDS,
    NEGATIVE_BASE, POSITIVE_BASE,
};
pub use state::{CommentMode, FeatureMark, LineState, LineStateStore};
pub use theme::Theme;
pub use tokenizer::{tokenize_line, StyledSpan, TokenClass};
