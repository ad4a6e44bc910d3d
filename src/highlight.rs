// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword highlighting for titles and previews.
//!
//! Spans are found against the original text, never against text that already
//! has markers in it. Replacing keywords one after another would let "mark"
//! match inside an inserted `<mark>` tag, or wrap "docker" inside an already
//! wrapped "docker-compose". Instead every occurrence of every keyword becomes
//! a byte range, overlapping and touching ranges are merged, and the text is
//! rebuilt once.
//!
//! Text outside the spans is copied verbatim. In particular nothing is HTML
//! escaped; that's the renderer's job.

use regex::RegexBuilder;
use serde::Serialize;
use tracing::warn;

/// A highlighted byte range `[start, end)` in the original text.
///
/// Both ends fall on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Opening and closing markers wrapped around each span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Marker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Marker {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::new("<mark>", "</mark>")
    }
}

/// Find every case-insensitive occurrence of every keyword.
///
/// Returned spans are sorted, non-overlapping and non-adjacent.
pub fn highlight_spans<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            continue;
        }

        let pattern = match RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                // Only reachable if the escaped keyword blows the regex size limit
                warn!(keyword, error = %e, "skipping keyword that can't be highlighted");
                continue;
            }
        };

        spans.extend(pattern.find_iter(text).map(|m| HighlightSpan {
            start: m.start(),
            end: m.end(),
        }));
    }

    merge_spans(spans)
}

/// Sort spans and merge any that overlap or touch.
pub fn merge_spans(mut spans: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    spans.sort_unstable();

    let mut merged: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Wrap spans of `text` in `marker`.
///
/// Spans must be sorted, non-overlapping and in bounds (as produced by
/// [`highlight_spans`]).
pub fn apply_spans(text: &str, spans: &[HighlightSpan], marker: &Marker) -> String {
    let extra = spans.len() * (marker.open.len() + marker.close.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;

    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&marker.open);
        out.push_str(&text[span.start..span.end]);
        out.push_str(&marker.close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Highlight with the default `<mark>` marker.
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    highlight_with(text, keywords, &Marker::default())
}

/// Highlight with a custom marker.
pub fn highlight_with<S: AsRef<str>>(text: &str, keywords: &[S], marker: &Marker) -> String {
    let spans = highlight_spans(text, keywords);
    if spans.is_empty() {
        return text.to_string();
    }
    apply_spans(text, &spans, marker)
}
