//! Incremental highlighter: edit intake and the re-synchronization driver.
//!
//! `SyntaxHighlighter` owns the document mirror, the per-line state store,
//! and the per-line resolved styling. The owning editor submits every edit
//! through [`SyntaxHighlighter::on_insert`] / [`on_delete`](SyntaxHighlighter::on_delete) /
//! [`on_replace`](SyntaxHighlighter::on_replace) and reads styled lines back;
//! it never mutates the core's state directly.
//!
//! After each edit the driver re-tokenizes forward from the edited line,
//! threading each line's end state into the next, and stops at the first
//! line whose recorded starting state matches the freshly computed one; at
//! that point no line below can style differently. Worst case (toggling an
//! unterminated block comment near the top of a large file) is a full
//! forward sweep; the amortized cost is proportional to the number of lines
//! whose leading state actually changed.
//!
//! All operations run synchronously on the caller's thread and complete
//! before returning; the owning editor serializes mutations.

use std::borrow::Cow;

use facet_edit_buffer::{DirtyLines, Document, Span, StyledLine};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::state::{LineState, LineStateStore};
use crate::theme::Theme;
use crate::tokenizer::{tokenize_line, StyledSpan};

/// Rendering parameters the core holds for the renderer.
///
/// These never affect tokenization; changing them only forces styles to be
/// regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetrics {
    /// Font family name.
    pub family: String,
    /// Point size.
    pub size: u16,
    /// Tab width in character cells, clamped to 1..=100 when set.
    pub tab_width: u16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            family: "Monospaced".to_string(),
            size: 14,
            tab_width: 4,
        }
    }
}

/// Internal inconsistency discovered while restyling.
///
/// Never surfaced to the caller: the recovery path discards all recorded
/// line states and lets the next edit or rebuild re-derive them.
#[derive(Debug, Error, PartialEq, Eq)]
enum Fault {
    #[error("line {line} out of range during restyle ({line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("anchor line {line} has no recorded state")]
    MissingAnchorState { line: usize },
}

/// The incremental syntax-highlighting core.
///
/// Owns a [`Document`] mirroring the editor's text, one recorded
/// [`LineState`] per line, and one resolved [`StyledLine`] per line. The
/// styled lines always cover the current document; after an edit only the
/// lines the resync sweep touched are recomputed, everything below the
/// sweep's fixed point keeps its (index-shifted) styling.
pub struct SyntaxHighlighter {
    document: Document,
    states: LineStateStore,
    styled: Vec<StyledLine>,
    theme: Theme,
    metrics: FontMetrics,
    enabled: bool,
}

impl SyntaxHighlighter {
    /// Creates a highlighter over an empty document.
    pub fn new(theme: Theme) -> Self {
        Self::from_text("", theme)
    }

    /// Creates a highlighter over the given initial text.
    pub fn from_text(text: &str, theme: Theme) -> Self {
        let mut hl = Self {
            document: Document::from_str(text),
            states: LineStateStore::new(),
            styled: Vec::new(),
            theme,
            metrics: FontMetrics::default(),
            enabled: true,
        };
        hl.rebuild_all();
        hl
    }

    // ==================== Read-back surface ====================

    /// Number of lines in the document. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Text of one line, without the trailing newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.document.line_text(line)
    }

    /// The styled rendition of one line. Out-of-range lines render empty.
    pub fn styled_line(&self, line: usize) -> StyledLine {
        self.styled.get(line).cloned().unwrap_or_default()
    }

    /// The recorded state the given line starts with, if computed.
    pub fn line_start_state(&self, line: usize) -> Option<LineState> {
        self.states.get(line)
    }

    /// Whether tokenization is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current rendering parameters.
    pub fn font_metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    // ==================== Edit intake ====================

    /// Handles an insertion of `text` at `offset`.
    ///
    /// CRLF/CR sequences in `text` are collapsed to LF (input is expected to
    /// be normalized already; this is the last line of defense).
    pub fn on_insert(&mut self, offset: usize, text: &str) -> DirtyLines {
        let text = normalize_newlines(text);
        if text.is_empty() {
            return DirtyLines::None;
        }

        if !self.enabled {
            let dirty = self.document.insert(offset, &text);
            self.restyle_plain(&dirty);
            return dirty;
        }

        let offset = offset.min(self.document.len());
        let start_line = self.document.line_of_offset(offset);
        let newlines = text.matches('\n').count();

        // Shift the per-line stores before resync so line indices already
        // agree with the edited text.
        self.states.insert_unknown(start_line, newlines);
        self.splice_styled(start_line, newlines, 0);

        let mut dirty = self.document.insert(offset, &text);
        match self.resync(start_line) {
            Ok(sweep) => dirty.merge(sweep),
            Err(fault) => self.recover(fault),
        }
        dirty
    }

    /// Handles a deletion of `len` characters at `offset`.
    pub fn on_delete(&mut self, offset: usize, len: usize) -> DirtyLines {
        let offset = offset.min(self.document.len());
        let len = len.min(self.document.len() - offset);
        if len == 0 {
            return DirtyLines::None;
        }

        if !self.enabled {
            let dirty = self.document.delete(offset, len);
            self.restyle_plain(&dirty);
            return dirty;
        }

        let start_line = self.document.line_of_offset(offset);
        let removed = self.document.slice(offset, offset + len);
        let newlines = removed.matches('\n').count();

        self.states.remove_after(start_line, newlines);
        self.splice_styled(start_line, 0, newlines);

        let mut dirty = self.document.delete(offset, len);
        match self.resync(start_line) {
            Ok(sweep) => dirty.merge(sweep),
            Err(fault) => self.recover(fault),
        }
        dirty
    }

    /// Handles replacing `len` characters at `offset` with `text`.
    pub fn on_replace(&mut self, offset: usize, len: usize, text: &str) -> DirtyLines {
        let mut dirty = if len > 0 {
            self.on_delete(offset, len)
        } else {
            DirtyLines::None
        };
        if !text.is_empty() {
            dirty.merge(self.on_insert(offset, text));
        }
        dirty
    }

    // ==================== Configuration ====================

    /// Enables or disables tokenization.
    ///
    /// Disabling styles all text uniformly and discards every recorded line
    /// state; re-enabling runs a full rebuild.
    pub fn set_enabled(&mut self, enabled: bool) -> DirtyLines {
        if self.enabled == enabled {
            return DirtyLines::None;
        }
        self.enabled = enabled;
        self.states.clear();
        if enabled {
            self.rebuild_all();
        } else {
            self.restyle_plain(&DirtyLines::FromLineToEnd(0));
        }
        DirtyLines::FromLineToEnd(0)
    }

    /// Updates the rendering parameters.
    ///
    /// Tokenization is unaffected; styles are regenerated wholesale because
    /// every resolved style must be reissued to the renderer.
    pub fn set_font_metrics(&mut self, metrics: FontMetrics) -> DirtyLines {
        let metrics = FontMetrics {
            tab_width: metrics.tab_width.clamp(1, 100),
            ..metrics
        };
        if metrics == self.metrics {
            return DirtyLines::None;
        }
        self.metrics = metrics;
        if self.enabled {
            self.rebuild_all();
        } else {
            self.restyle_plain(&DirtyLines::FromLineToEnd(0));
        }
        DirtyLines::FromLineToEnd(0)
    }

    // ==================== Restyling ====================

    /// Discards all recorded state and retokenizes the whole document.
    pub fn rebuild_all(&mut self) {
        debug!(lines = self.document.line_count(), "full highlight rebuild");
        self.states.clear();
        self.styled.clear();

        let mut state = LineState::default();
        for line in 0..self.document.line_count() {
            let text = self.document.line_text(line).unwrap_or_default();
            self.states.set(line, state);
            let (spans, end) = tokenize_line(&state, &text);
            self.styled.push(self.resolve_spans(&text, &spans));
            state = end;
        }
    }

    /// Re-tokenizes forward from the edited line until the fixed point.
    ///
    /// Walks backward over the contiguous not-yet-computed run to the
    /// nearest anchor line with a recorded state (line 0 anchors with the
    /// default state), then tokenizes forward, recording each line's start
    /// state and styling. Stops when a freshly computed end state equals the
    /// next line's recorded state, or at end of document.
    fn resync(&mut self, edit_line: usize) -> Result<DirtyLines, Fault> {
        let line_count = self.document.line_count();
        let edit_line = edit_line.min(line_count.saturating_sub(1));

        let anchor = self.states.anchor(edit_line);
        let mut state = if anchor == 0 {
            LineState::default()
        } else {
            self.states
                .get(anchor)
                .ok_or(Fault::MissingAnchorState { line: anchor })?
        };

        let first = anchor;
        state = self.restyle_line(anchor, state)?;
        let mut last = anchor;

        let mut line = anchor + 1;
        while line < line_count {
            if self.states.get(line) == Some(state) {
                break;
            }
            state = self.restyle_line(line, state)?;
            last = line;
            line += 1;
        }

        trace!(from = first, to = last + 1, "resynchronized");
        Ok(if first == last {
            DirtyLines::Single(first)
        } else {
            DirtyLines::Range {
                from: first,
                to: last + 1,
            }
        })
    }

    /// Tokenizes one line: records its start state, resolves and stores its
    /// styling, and returns the state the next line starts with.
    fn restyle_line(&mut self, line: usize, start: LineState) -> Result<LineState, Fault> {
        let text = self.document.line_text(line).ok_or(Fault::LineOutOfRange {
            line,
            line_count: self.document.line_count(),
        })?;

        self.states.set(line, start);
        let (spans, end) = tokenize_line(&start, &text);
        let styled = self.resolve_spans(&text, &spans);
        if line >= self.styled.len() {
            self.styled.resize(line + 1, StyledLine::empty());
        }
        self.styled[line] = styled;
        Ok(end)
    }

    /// Resolves tokenizer spans against the theme into a renderable line.
    fn resolve_spans(&self, text: &str, spans: &[StyledSpan]) -> StyledLine {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::with_capacity(spans.len());
        for span in spans {
            let end = (span.start + span.len).min(chars.len());
            let run: String = chars[span.start.min(end)..end].iter().collect();
            out.push(Span::new(run, self.theme.resolve(span.class, &span.marks)));
        }
        StyledLine::new(out)
    }

    /// Recovery path for internal inconsistencies: discard every recorded
    /// line state and let the next edit or rebuild re-derive them. Never
    /// surfaced to the caller.
    fn recover(&mut self, fault: Fault) {
        warn!(%fault, "inconsistent highlight state; discarding line states");
        self.states.clear();
    }

    /// Keeps the styled-line sequence index-aligned with the document by
    /// inserting `added` empty entries (or dropping `removed` entries)
    /// after `line`.
    fn splice_styled(&mut self, line: usize, added: usize, removed: usize) {
        let at = (line + 1).min(self.styled.len());
        if added > 0 {
            self.styled
                .splice(at..at, std::iter::repeat(StyledLine::empty()).take(added));
        }
        if removed > 0 {
            let to = (at + removed).min(self.styled.len());
            self.styled.drain(at..to);
        }
    }

    /// Uniform (unstyled) restyling for the dirty region, used while
    /// tokenization is disabled.
    fn restyle_plain(&mut self, dirty: &DirtyLines) {
        match dirty {
            DirtyLines::None => {}
            DirtyLines::Single(line) => {
                let text = self.document.line_text(*line).unwrap_or_default();
                if *line >= self.styled.len() {
                    self.styled.resize(line + 1, StyledLine::empty());
                }
                self.styled[*line] = plain_line(&text);
            }
            DirtyLines::Range { from, .. } | DirtyLines::FromLineToEnd(from) => {
                self.styled.truncate(*from);
                for line in *from..self.document.line_count() {
                    let text = self.document.line_text(line).unwrap_or_default();
                    self.styled.push(plain_line(&text));
                }
            }
        }
    }
}

/// Collapses CRLF and lone CR to LF. Borrows when already normalized.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// A single unstyled span covering the line (empty lines have no spans).
fn plain_line(text: &str) -> StyledLine {
    if text.is_empty() {
        StyledLine::empty()
    } else {
        StyledLine::plain(text)
    }
}
