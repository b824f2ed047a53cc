//! Gap buffer implementation for efficient text storage.
//!
//! A gap buffer is a character array with a movable gap. Edits at the gap are
//! O(1); moving the gap is O(distance) and amortizes well for typical editing
//! patterns (locality of edits). This variant is offset-addressed: callers
//! pass logical character positions and the buffer moves the gap itself.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// A gap buffer over `char`s with offset-addressed insert and delete.
///
/// The backing storage is [pre-gap content | gap | post-gap content]. All
/// public positions are logical character offsets, independent of where the
/// gap currently sits.
#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    /// First unused slot of the gap.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer initialized with the given text.
    pub fn from_str(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let capacity = len + INITIAL_GAP_SIZE;

        let mut data = Vec::with_capacity(capacity);
        data.extend(chars);
        data.resize(capacity, '\0');

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap to the specified logical position.
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            // Shift the chars between pos and the gap to the far side.
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to at least `min_size`, preserving its position.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_gap_end = self.gap_end;
        let old_len = self.data.len();
        let post_gap_len = old_len - old_gap_end;

        let new_size = old_len + growth;
        self.data.resize(new_size, '\0');

        // Shift post-gap content to the end of the grown storage.
        if post_gap_len > 0 {
            let new_post_gap_start = new_size - post_gap_len;
            self.data.copy_within(old_gap_end..old_len, new_post_gap_start);
        }
        self.gap_end = new_size - post_gap_len;
    }

    /// Inserts `text` at the given logical offset.
    ///
    /// Offsets past the end are clamped to the end of the buffer.
    pub fn insert_at(&mut self, offset: usize, text: &str) {
        self.move_gap_to(offset);
        let count = text.chars().count();
        self.ensure_gap(count);
        for ch in text.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Deletes `count` characters starting at the given logical offset.
    ///
    /// The range is clamped to the buffer bounds. Returns the number of
    /// characters actually removed.
    pub fn delete_range(&mut self, offset: usize, count: usize) -> usize {
        let offset = offset.min(self.len());
        let count = count.min(self.len() - offset);
        self.move_gap_to(offset);
        // Deleting after the gap is just widening it.
        self.gap_end += count;
        count
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the content of a logical range as a String.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }

        let mut result = String::with_capacity(end - start);
        for i in start..end {
            if let Some(ch) = self.char_at(i) {
                result.push(ch);
            }
        }
        result
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_from_str() {
        let buf = GapBuffer::from_str("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_insert_at_start() {
        let mut buf = GapBuffer::from_str("world");
        buf.insert_at(0, "hello ");
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_insert_at_middle() {
        let mut buf = GapBuffer::from_str("ac");
        buf.insert_at(1, "b");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_insert_at_end() {
        let mut buf = GapBuffer::from_str("ab");
        buf.insert_at(2, "c");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_insert_past_end_clamps() {
        let mut buf = GapBuffer::from_str("ab");
        buf.insert_at(100, "c");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_delete_range() {
        let mut buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.delete_range(5, 6), 6);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_delete_range_at_start() {
        let mut buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.delete_range(0, 6), 6);
        assert_eq!(buf.to_string(), "world");
    }

    #[test]
    fn test_delete_range_clamped() {
        let mut buf = GapBuffer::from_str("abc");
        assert_eq!(buf.delete_range(1, 100), 2);
        assert_eq!(buf.to_string(), "a");
        assert_eq!(buf.delete_range(5, 1), 0);
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_interleaved_edits() {
        let mut buf = GapBuffer::from_str("abcdef");
        buf.delete_range(2, 2); // "abef"
        buf.insert_at(2, "XY"); // "abXYef"
        buf.delete_range(0, 1); // "bXYef"
        buf.insert_at(5, "!"); // "bXYef!"
        assert_eq!(buf.to_string(), "bXYef!");
    }

    #[test]
    fn test_char_at() {
        let buf = GapBuffer::from_str("hello");
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(4), Some('o'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_char_at_with_gap_in_middle() {
        let mut buf = GapBuffer::from_str("hello");
        buf.delete_range(2, 0); // moves the gap to offset 2 without removing anything
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(2), Some('l'));
        assert_eq!(buf.char_at(4), Some('o'));
    }

    #[test]
    fn test_slice() {
        let buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.slice(0, 5), "hello");
        assert_eq!(buf.slice(6, 11), "world");
        assert_eq!(buf.slice(0, 11), "hello world");
        assert_eq!(buf.slice(4, 4), "");
        assert_eq!(buf.slice(9, 100), "ld");
    }

    #[test]
    fn test_multichar_insert_grows_gap() {
        let mut buf = GapBuffer::new();
        let long: String = std::iter::repeat("abcdefgh").take(100).collect();
        buf.insert_at(0, &long);
        assert_eq!(buf.len(), 800);
        assert_eq!(buf.to_string(), long);
    }

    #[test]
    fn test_non_ascii_chars_count_as_one() {
        let mut buf = GapBuffer::from_str("a\u{2780}b");
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.char_at(1), Some('\u{2780}'));
        buf.delete_range(1, 1);
        assert_eq!(buf.to_string(), "ab");
    }
}
