//! Line tokenizer: pure function from (starting state, line text) to
//! (styled spans, ending state).
//!
//! A single left-to-right pass classifies every character of the line into
//! spans (longest match per token) and threads the persistent state through:
//! an open block/doc comment continues until `*/`, feature delimiters toggle
//! their slot's mark, and the resulting end state becomes the next line's
//! start state.
//!
//! Tie-breaks: comment checks precede string and identifier checks; a line
//! comment (`//` or `--`) unconditionally consumes the rest of the line;
//! feature delimiters are checked before symbol/identifier classification so
//! they are never absorbed into a symbol run.

use crate::language::{self, Polarity, FEATURE_COUNT};
use crate::state::{CommentMode, FeatureMark, LineState};

/// Token classification assigned to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Plain identifier or other regular text.
    Normal,
    /// A run of punctuation characters.
    Symbol,
    /// An identifier run starting with a digit.
    Number,
    /// A reserved word.
    Keyword,
    /// A string literal (terminated or not).
    Str,
    /// A `//` or `--` comment running to end of line.
    LineComment,
    /// Inside a `/* ... */` comment.
    BlockComment,
    /// Inside a `/** ... */` comment.
    DocComment,
    /// A feature delimiter character itself.
    Feature { slot: usize, polarity: Polarity },
}

/// A classified run of characters within one line.
///
/// Offsets and lengths are in characters, relative to the line start. The
/// active feature marks are snapshotted per span (they can change mid-line at
/// every delimiter) so the style resolver sees exactly the marks in force
/// where the span sits. Spans are produced per scan and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Character offset of the span within its line.
    pub start: usize,
    /// Length of the span in characters. Always non-zero.
    pub len: usize,
    /// Token classification.
    pub class: TokenClass,
    /// Feature marks active over this span (after any toggle the span
    /// itself performed).
    pub marks: [FeatureMark; FEATURE_COUNT],
}

/// Tokenizes one line given the state it starts with.
///
/// `line` must not contain the trailing newline. Returns the spans covering
/// every character of the line and the state the next line starts with.
/// Pure and deterministic: the same input always produces the same output.
pub fn tokenize_line(start: &LineState, line: &str) -> (Vec<StyledSpan>, LineState) {
    let chars: Vec<char> = line.chars().collect();
    let n = chars.len();
    let mut state = *start;
    let mut spans = Vec::new();
    let mut i = 0;

    while i < n {
        let start_ix = i;
        let c = chars[i];
        if c == '\n' {
            break;
        }

        // Comment openers, only at top level. A doc comment is `/**` not
        // immediately closed by `/` (so `/**/` is a block open + close).
        if state.comment == CommentMode::None
            && c == '/'
            && i + 2 < n
            && chars[i + 1] == '*'
            && chars[i + 2] == '*'
            && (i + 3 >= n || chars[i + 3] != '/')
        {
            state.comment = CommentMode::Doc;
        }
        if state.comment == CommentMode::None && c == '/' && i + 1 < n && chars[i + 1] == '*' {
            state.comment = CommentMode::Block;
            i += 2;
        }

        // Comment continuation: consume to `*/` or end of line. The span
        // includes the closer; an unterminated comment carries its mode into
        // the end state.
        if state.comment != CommentMode::None {
            let class = match state.comment {
                CommentMode::Doc => TokenClass::DocComment,
                _ => TokenClass::BlockComment,
            };
            while i < n && !(chars[i] == '*' && i + 1 < n && chars[i + 1] == '/') {
                i += 1;
            }
            if i + 1 < n && chars[i] == '*' && chars[i + 1] == '/' {
                i += 2;
                state.comment = CommentMode::None;
            }
            spans.push(StyledSpan {
                start: start_ix,
                len: i - start_ix,
                class,
                marks: state.marks,
            });
            continue;
        }

        if (c == '/' || c == '-') && i + 1 < n && chars[i + 1] == c {
            // Line comment: everything to end of line, nothing after it is
            // tokenized (an embedded `/* */` is part of the comment).
            spans.push(StyledSpan {
                start: start_ix,
                len: n - start_ix,
                class: TokenClass::LineComment,
                marks: state.marks,
            });
            break;
        }

        if c == '"' {
            // String literal: `\x` escapes the next character unless it is a
            // newline. The run is one span whether or not it terminates, and
            // an open string does not carry into the next line's state.
            i += 1;
            while i < n {
                if chars[i] == '\n' {
                    break;
                }
                if chars[i] == '"' {
                    i += 1;
                    break;
                }
                if chars[i] == '\\' && i + 1 < n && chars[i + 1] != '\n' {
                    i += 1;
                }
                i += 1;
            }
            spans.push(StyledSpan {
                start: start_ix,
                len: i - start_ix,
                class: TokenClass::Str,
                marks: state.marks,
            });
        } else if let Some((slot, polarity)) = language::feature_delimiter(c) {
            // Feature delimiter: toggle the slot. Marked (either way) goes
            // back to Off; Off takes the delimiter family's mark. This is a
            // toggle, not a stack: an unbalanced delimiter leaves the slot
            // marked into following lines until a matching toggle appears.
            i += 1;
            state.marks[slot] = if state.marks[slot] == FeatureMark::Off {
                match polarity {
                    Polarity::Positive => FeatureMark::Positive,
                    Polarity::Negative => FeatureMark::Negative,
                }
            } else {
                FeatureMark::Off
            };
            spans.push(StyledSpan {
                start: start_ix,
                len: 1,
                class: TokenClass::Feature { slot, polarity },
                marks: state.marks,
            });
        } else if language::is_identifier_char(c) {
            // Identifier run: Number if it starts with a digit, Keyword on an
            // exact reserved-word match, Normal otherwise.
            i += 1;
            while i < n && language::is_identifier_char(chars[i]) {
                i += 1;
            }
            let class = if c.is_ascii_digit() {
                TokenClass::Number
            } else {
                let word: String = chars[start_ix..i].iter().collect();
                if language::is_keyword(&word) {
                    TokenClass::Keyword
                } else {
                    TokenClass::Normal
                }
            };
            spans.push(StyledSpan {
                start: start_ix,
                len: i - start_ix,
                class,
                marks: state.marks,
            });
        } else {
            // Symbol run: stops before anything that could start another
            // token (identifier chars, comment starters, feature delimiters).
            i += 1;
            while i < n {
                let ch = chars[i];
                if language::is_identifier_char(ch)
                    || ch == '\n'
                    || ch == '-'
                    || ch == '/'
                    || language::feature_delimiter(ch).is_some()
                {
                    break;
                }
                i += 1;
            }
            spans.push(StyledSpan {
                start: start_ix,
                len: i - start_ix,
                class: TokenClass::Symbol,
                marks: state.marks,
            });
        }
    }

    (spans, state)
}
