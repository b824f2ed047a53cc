//! Persistent per-line lexer state and the line state store.
//!
//! Tokenizing a line needs to know what carried over from the lines above:
//! whether a block or doc comment is still open, and which feature marks are
//! active. That is a [`LineState`]. The [`LineStateStore`] keeps one recorded
//! state per line (the state the line *starts* with, as last computed) and
//! is what lets the re-synchronization driver stop as soon as a freshly
//! computed state matches the recorded one.

use crate::language::FEATURE_COUNT;

/// Multi-line comment mode carried across line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentMode {
    /// Not inside a comment.
    #[default]
    None,
    /// Inside a `/* ... */` block comment.
    Block,
    /// Inside a `/** ... */` doc comment.
    Doc,
}

/// State of one feature slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureMark {
    /// Slot not marked.
    #[default]
    Off,
    /// Marked by a positive delimiter.
    Positive,
    /// Marked by a negative delimiter.
    Negative,
}

/// The lexer state a line starts with.
///
/// A value of this type is always fully defined; "not yet computed" is
/// represented by the *absence* of a state in the store (`Option::None`),
/// never by sentinel field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineState {
    /// Open comment mode, if any.
    pub comment: CommentMode,
    /// Active feature marks, one per slot.
    pub marks: [FeatureMark; FEATURE_COUNT],
}

impl LineState {
    /// Returns true if any feature mark is active.
    pub fn any_mark(&self) -> bool {
        self.marks.iter().any(|m| *m != FeatureMark::Off)
    }
}

/// Ordered sequence of recorded per-line states, index = line number.
///
/// Entries may be transiently absent (freshly inserted lines, or lines past
/// the tracked range) until re-synchronization computes them. Absent entries
/// are contiguous by construction: edits only ever punch `None` holes
/// directly below the line being retokenized next.
#[derive(Debug, Default)]
pub struct LineStateStore {
    states: Vec<Option<LineState>>,
}

impl LineStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Number of tracked lines (may lag behind the document line count;
    /// trailing entries are synthesized lazily by the driver).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no line states are tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the recorded starting state for `line`, or `None` if the line
    /// is untracked or not yet computed.
    pub fn get(&self, line: usize) -> Option<LineState> {
        self.states.get(line).copied().flatten()
    }

    /// Records the starting state for `line`, growing the store with
    /// uncomputed entries if the line is past the tracked range.
    pub fn set(&mut self, line: usize, state: LineState) {
        if line >= self.states.len() {
            self.states.resize(line + 1, None);
        }
        self.states[line] = Some(state);
    }

    /// Shifts the store for an insertion of `count` new lines after `line`.
    ///
    /// The new entries are uncomputed. Nothing is inserted when `line` is
    /// already the last tracked line (or beyond): trailing entries are
    /// synthesized lazily when the driver reaches them.
    pub fn insert_unknown(&mut self, line: usize, count: usize) {
        if count == 0 || self.states.is_empty() || line >= self.states.len() - 1 {
            return;
        }
        let at = line + 1;
        self.states.splice(at..at, std::iter::repeat(None).take(count));
    }

    /// Shifts the store for a deletion of `count` lines after `line`,
    /// clamped to the tracked range.
    pub fn remove_after(&mut self, line: usize, count: usize) {
        if count == 0 || self.states.is_empty() {
            return;
        }
        let from = (line + 1).min(self.states.len());
        let to = (from + count).min(self.states.len());
        self.states.drain(from..to);
    }

    /// Walks backward from `line` to the nearest line with a recorded state.
    ///
    /// Uncomputed runs are contiguous, so the first recorded entry at or
    /// below `line` is a valid re-synchronization anchor. Line 0 anchors the
    /// walk unconditionally (its starting state is the default state).
    pub fn anchor(&self, line: usize) -> usize {
        let mut line = line;
        while line > 0 && self.get(line).is_none() {
            line -= 1;
        }
        line
    }

    /// Discards all recorded states. The next edit or full rebuild
    /// re-derives everything from the document text.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}
