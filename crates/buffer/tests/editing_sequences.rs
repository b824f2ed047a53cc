//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the gap buffer and line index stay in sync
//! through complex offset-addressed editing patterns.

use facet_edit_buffer::{DirtyLines, Document};

#[test]
fn test_type_word_then_delete_entirely() {
    let mut doc = Document::new();

    for (i, ch) in "hello".chars().enumerate() {
        doc.insert(i, &ch.to_string());
    }
    assert_eq!(doc.text(), "hello");

    for i in (0..5).rev() {
        doc.delete(i, 1);
    }
    assert!(doc.is_empty());
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn test_build_multiline_document_incrementally() {
    let mut doc = Document::new();

    doc.insert(0, "first line");
    doc.insert(10, "\nsecond line");
    doc.insert(22, "\nthird line");

    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0).unwrap(), "first line");
    assert_eq!(doc.line_text(1).unwrap(), "second line");
    assert_eq!(doc.line_text(2).unwrap(), "third line");

    // Insert into the middle line: "second |line"
    let offset = doc.line_start(1).unwrap() + 7;
    doc.insert(offset, "awesome ");
    assert_eq!(doc.line_text(1).unwrap(), "second awesome line");
}

#[test]
fn test_split_and_rejoin_line() {
    let mut doc = Document::from_str("alpha beta\ngamma");

    let dirty = doc.insert(5, "\n");
    assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0).unwrap(), "alpha");
    assert_eq!(doc.line_text(1).unwrap(), " beta");

    let dirty = doc.delete(5, 1);
    assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
    assert_eq!(doc.text(), "alpha beta\ngamma");
}

#[test]
fn test_delete_across_many_lines() {
    let mut doc = Document::from_str("a\nb\nc\nd\ne");
    assert_eq!(doc.line_count(), 5);

    // Delete "\nb\nc\nd" (offsets 1..7)
    doc.delete(1, 6);
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.text(), "a\ne");
}

#[test]
fn test_replace_spanning_lines() {
    let mut doc = Document::from_str("one\ntwo\nthree");

    // Replace "two" with a two-line chunk
    let start = doc.line_start(1).unwrap();
    doc.replace(start, 3, "2a\n2b");
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.text(), "one\n2a\n2b\nthree");
}

#[test]
fn test_paste_large_block_then_undo_like_delete() {
    let mut doc = Document::from_str("start\nend");
    let block = "x\n".repeat(100);

    doc.insert(6, &block);
    assert_eq!(doc.line_count(), 102);
    assert_eq!(doc.line_text(0).unwrap(), "start");
    assert_eq!(doc.line_text(101).unwrap(), "end");

    doc.delete(6, block.chars().count());
    assert_eq!(doc.text(), "start\nend");
    assert_eq!(doc.line_count(), 2);
}

#[test]
fn test_many_small_edits_keep_index_consistent() {
    // Enough mutations to trip the sampled debug consistency check.
    let mut doc = Document::new();
    for i in 0..200 {
        let text = if i % 7 == 0 { "\n" } else { "a" };
        doc.insert(doc.len(), text);
    }
    let line_count = doc.line_count();
    for _ in 0..100 {
        doc.delete(doc.len().saturating_sub(1), 1);
    }
    assert!(doc.line_count() <= line_count);
    assert_eq!(doc.len(), 100);
}
