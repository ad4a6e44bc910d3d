//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical document builders to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with just a title.
pub fn make_doc(id: usize, title: &str) -> Document {
    Document::new(format!("doc-{}", id), title)
}

/// Create a document with title, body and tags.
pub fn make_doc_full(id: usize, title: &str, body: &str, tags: &[&str], trending: bool) -> Document {
    Document::new(format!("doc-{}", id), title)
        .with_body(body)
        .with_tags(tags.iter().copied())
        .trending(trending)
}

/// Words used by [`make_graded_docs`] and [`graded_query`].
pub const GRADE_WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima",
];

/// Query containing every grade word.
pub fn graded_query() -> String {
    GRADE_WORDS.join(" ")
}

/// `n` documents (at most 12) where doc `i` has the first `i + 1` grade words in
/// its title, so each scores `3 × (i + 1)` against [`graded_query`].
pub fn make_graded_docs(n: usize) -> Vec<Document> {
    (0..n.min(GRADE_WORDS.len()))
        .map(|i| Document::new(format!("doc-{}", i), GRADE_WORDS[..=i].join(" ")))
        .collect()
}
