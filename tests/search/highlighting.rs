//! Highlighting ranked results.

use super::common::REFERENCE_QUERY;
use livesuggest::{highlight, highlight_spans, highlight_with, rank, reference_catalog, Marker};

#[test]
fn ranked_titles_highlight_their_matched_keywords() {
    let catalog = reference_catalog();
    let results = rank(REFERENCE_QUERY, &catalog);

    let rendered: Vec<String> = results
        .iter()
        .map(|r| highlight(&r.document.title, &r.matched_keywords))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "<mark>Kubernetes</mark> <mark>Deployment</mark> Best Practices",
            "<mark>Troubleshooting</mark> Container Issues",
        ]
    );
}

#[test]
fn preview_highlighting_uses_the_same_keywords() {
    let catalog = reference_catalog();
    let results = rank(REFERENCE_QUERY, &catalog);

    let preview = highlight(&results[0].document.body, &results[0].matched_keywords);
    assert!(preview.contains("<mark>Kubernetes</mark>"));
}

#[test]
fn tag_only_results_render_unchanged() {
    let catalog = reference_catalog();
    // "debugging" is only a tag on the troubleshooting article
    let results = rank("debugging", &catalog);
    assert_eq!(results.len(), 1);
    assert!(results[0].matched_keywords.is_empty());

    let title = &results[0].document.title;
    assert_eq!(&highlight(title, &results[0].matched_keywords), title);
}

#[test]
fn nested_keywords_produce_a_single_marker() {
    let text = "Docker-Compose and docker";
    let rendered = highlight_with(text, &["docker", "docker-compose"], &Marker::new("*", "*"));
    assert_eq!(rendered, "*Docker-Compose* and *docker*");
}

#[test]
fn spans_point_into_the_original_text() {
    let text = "Kubernetes deployment on kubernetes";
    let spans = highlight_spans(text, &["kubernetes"]);
    let slices: Vec<&str> = spans.iter().map(|s| &text[s.start..s.end]).collect();
    assert_eq!(slices, vec!["Kubernetes", "kubernetes"]);
}
