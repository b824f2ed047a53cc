//! Line index for tracking line boundaries in the document.
//!
//! Maintains an ascending array of line start offsets for O(1) line count and
//! line access, with O(log n) offset-to-line lookup. Updates are incremental:
//! an edit shifts the affected tail of the array instead of rescanning the
//! whole document.

/// Tracks line boundaries as character offsets.
///
/// `line_starts[0]` is always 0; every other entry is the offset of the
/// character immediately after a newline. A document always has at least one
/// line, even when empty.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the index from scratch for the given content.
    ///
    /// O(n) in the content length; only needed for bulk loads.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the character offset of the end of the given line.
    ///
    /// For all lines except the last this points at the newline character.
    /// For the last line it equals `total_len`.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(total_len)
        }
    }

    /// Returns the length of the given line (excluding the newline).
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line, total_len)?;
        Some(end - start)
    }

    /// Returns the line containing the given character offset.
    ///
    /// Offsets past the end resolve to the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Updates the index for an insertion of `text` at `offset`.
    ///
    /// Existing starts after the insertion point shift right by the inserted
    /// character count; each newline in `text` contributes one new line start.
    /// A single splice keeps the array sorted.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let inserted = text.chars().count();
        if inserted == 0 {
            return;
        }

        let line = self.line_at_offset(offset);
        for start in self.line_starts.iter_mut().skip(line + 1) {
            *start += inserted;
        }

        let new_starts: Vec<usize> = text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(i, _)| offset + i + 1)
            .collect();
        if !new_starts.is_empty() {
            let at = (line + 1).min(self.line_starts.len());
            self.line_starts.splice(at..at, new_starts);
        }
    }

    /// Updates the index for a deletion of `removed` characters at `offset`.
    ///
    /// Line starts created by newlines inside the deleted range disappear;
    /// starts past the range shift left by the removed character count.
    pub fn remove(&mut self, offset: usize, removed: usize) {
        if removed == 0 {
            return;
        }
        let end = offset + removed;
        self.line_starts.retain(|&s| s <= offset || s > end);
        for start in self.line_starts.iter_mut() {
            if *start > offset {
                *start -= removed;
            }
        }
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_empty() {
        let mut index = LineIndex::new();
        index.rebuild("".chars());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_multiple_lines() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld\n".chars());
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(6));
        assert_eq!(index.line_start(2), Some(12));
    }

    #[test]
    fn test_line_end_and_len() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld".chars());
        assert_eq!(index.line_end(0, 11), Some(5)); // points at the newline
        assert_eq!(index.line_end(1, 11), Some(11)); // last line ends at total_len
        assert_eq!(index.line_len(0, 11), Some(5));
        assert_eq!(index.line_len(1, 11), Some(5));
        assert_eq!(index.line_len(2, 11), None);
    }

    #[test]
    fn test_line_at_offset() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld\nfoo".chars());

        assert_eq!(index.line_at_offset(0), 0);
        assert_eq!(index.line_at_offset(5), 0); // the newline belongs to line 0
        assert_eq!(index.line_at_offset(6), 1);
        assert_eq!(index.line_at_offset(12), 2);
        assert_eq!(index.line_at_offset(999), 2);
    }

    #[test]
    fn test_insert_without_newline() {
        let mut index = LineIndex::new();
        index.rebuild("a\nb\nc".chars());
        index.insert(0, "xyz");
        assert_eq!(index.line_starts(), &[0, 5, 7]);
    }

    #[test]
    fn test_insert_single_newline() {
        let mut index = LineIndex::new();
        index.rebuild("helloworld".chars());
        index.insert(5, "\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_starts(), &[0, 6]);
    }

    #[test]
    fn test_insert_text_with_embedded_newlines() {
        let mut index = LineIndex::new();
        index.rebuild("ab\ncd".chars());
        // Insert "x\ny\n" at offset 1 (inside line 0)
        index.insert(1, "x\ny\n");
        // Content is now "ax\ny\nb\ncd"
        assert_eq!(index.line_starts(), &[0, 3, 5, 7]);
    }

    #[test]
    fn test_insert_at_line_start_keeps_that_start() {
        let mut index = LineIndex::new();
        index.rebuild("ab\ncd".chars());
        // Inserting at offset 3 (start of line 1) extends line 1, so its
        // start offset is unchanged.
        index.insert(3, "zz");
        assert_eq!(index.line_starts(), &[0, 3]);
    }

    #[test]
    fn test_remove_within_line() {
        let mut index = LineIndex::new();
        index.rebuild("aa\nbb\ncc".chars());
        index.remove(0, 1);
        assert_eq!(index.line_starts(), &[0, 2, 5]);
    }

    #[test]
    fn test_remove_spanning_newline_joins_lines() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld".chars());
        // Remove "o\nw" (offsets 4..7)
        index.remove(4, 3);
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_starts(), &[0]);
    }

    #[test]
    fn test_remove_multiple_newlines() {
        let mut index = LineIndex::new();
        index.rebuild("a\nb\nc\nd".chars());
        // Remove "\nb\nc" (offsets 1..5)
        index.remove(1, 4);
        assert_eq!(index.line_starts(), &[0, 2]);
    }

    #[test]
    fn test_insert_then_remove_round_trip() {
        let mut index = LineIndex::new();
        index.rebuild("one\ntwo\nthree".chars());
        let before = index.line_starts().to_vec();
        index.insert(4, "zero\n");
        index.remove(4, 5);
        assert_eq!(index.line_starts(), &before[..]);
    }
}
