//! Offset-addressed document model.
//!
//! The highlighting core keeps its own mirror of the editor's text so it can
//! re-tokenize lines after an edit. `Document` combines a gap buffer (char
//! storage) with a line index (line boundary tracking) behind the three edit
//! operations the owning editor submits: insert, delete, replace.
//!
//! Coordinates are character offsets. The owning editor is expected to reject
//! out-of-bounds edits before they get here; as a second line of defense all
//! offsets are clamped so malformed coordinates cannot corrupt storage.

use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::types::DirtyLines;

/// A line-addressable text document with offset-based edits.
///
/// Each mutation returns [`DirtyLines`] describing the repaint region implied
/// by the text change alone (the caller merges in whatever restyling the edit
/// triggered).
#[derive(Debug)]
pub struct Document {
    buffer: GapBuffer,
    lines: LineIndex,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            lines: LineIndex::new(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a document initialized with the given content.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let buffer = GapBuffer::from_str(content);
        let mut lines = LineIndex::new();
        lines.rebuild(content.chars());

        Self {
            buffer,
            lines,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    // ==================== Accessors ====================

    /// Returns the total character count.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the entire document content as a String.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Returns the content of the given line, without the trailing newline.
    ///
    /// Returns `None` if the line is out of bounds.
    pub fn line_text(&self, line: usize) -> Option<String> {
        let start = self.lines.line_start(line)?;
        let end = self.lines.line_end(line, self.buffer.len())?;
        Some(self.buffer.slice(start, end))
    }

    /// Returns the length of the given line (excluding the newline).
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.line_len(line, self.buffer.len()).unwrap_or(0)
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.lines.line_start(line)
    }

    /// Returns the line containing the given offset.
    ///
    /// Offsets past the end resolve to the last line.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.lines.line_at_offset(offset)
    }

    /// Returns the content of an offset range as a String (clamped to bounds).
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.buffer.slice(start, end)
    }

    // ==================== Mutations ====================

    /// Inserts `text` at the given offset (clamped to the document end).
    pub fn insert(&mut self, offset: usize, text: &str) -> DirtyLines {
        if text.is_empty() {
            return DirtyLines::None;
        }
        let offset = offset.min(self.buffer.len());
        let line = self.lines.line_at_offset(offset);

        self.buffer.insert_at(offset, text);
        self.lines.insert(offset, text);
        self.assert_line_index_consistent();

        if text.contains('\n') {
            // The split pushes every subsequent line down.
            DirtyLines::FromLineToEnd(line)
        } else {
            DirtyLines::Single(line)
        }
    }

    /// Deletes `len` characters starting at `offset` (clamped to bounds).
    pub fn delete(&mut self, offset: usize, len: usize) -> DirtyLines {
        let offset = offset.min(self.buffer.len());
        let len = len.min(self.buffer.len() - offset);
        if len == 0 {
            return DirtyLines::None;
        }

        let line = self.lines.line_at_offset(offset);
        let removed = self.buffer.slice(offset, offset + len);

        self.buffer.delete_range(offset, len);
        self.lines.remove(offset, len);
        self.assert_line_index_consistent();

        if removed.contains('\n') {
            // The join pulls every subsequent line up.
            DirtyLines::FromLineToEnd(line)
        } else {
            DirtyLines::Single(line)
        }
    }

    /// Replaces `len` characters at `offset` with `text`.
    pub fn replace(&mut self, offset: usize, len: usize, text: &str) -> DirtyLines {
        let mut dirty = self.delete(offset, len);
        dirty.merge(self.insert(offset, text));
        dirty
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies the incremental line index matches a fresh
    /// rebuild from the buffer content.
    ///
    /// Catches cumulative drift between incremental updates and ground truth.
    /// Sampled (every 64th mutation) so the O(n) rebuild doesn't tank debug
    /// performance in tight edit loops. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        assert_eq!(
            self.lines.line_starts(),
            expected.line_starts(),
            "line index drift after {} mutations",
            self.debug_mutation_count
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
