// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Arbitrary text and keywords (regex metacharacters, multi-byte case
//! folding) must never panic, and stripping the markers must give back
//! the original text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use livesuggest::{highlight_spans, highlight_with, Marker};

fuzz_target!(|input: (String, Vec<String>)| {
    let (text, keywords) = input;
    if text.len() > 1024 || keywords.len() > 16 {
        return;
    }

    let spans = highlight_spans(&text, &keywords);
    for span in &spans {
        assert!(span.start < span.end && span.end <= text.len());
        assert!(text.is_char_boundary(span.start) && text.is_char_boundary(span.end));
    }
    for pair in spans.windows(2) {
        assert!(pair[0].end < pair[1].start, "spans overlap or touch");
    }

    // Markers that cannot appear in the input make stripping unambiguous
    let marker = Marker::new("\u{0}[", "]\u{0}");
    if text.contains('\u{0}') {
        return;
    }
    let rendered = highlight_with(&text, &keywords, &marker);
    assert_eq!(rendered.replace("\u{0}[", "").replace("]\u{0}", ""), text);
});
