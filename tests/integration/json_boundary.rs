//! The untyped boundary used by the WASM bindings and JSON pipes.

use livesuggest::{rank_value, reference_catalog, RankError};
use serde_json::{json, Value};

fn catalog() -> Value {
    serde_json::to_value(reference_catalog()).unwrap()
}

#[test]
fn response_serializes_with_camel_case_keys() {
    let response = rank_value(&json!("kubernetes"), &catalog(), None).unwrap();
    let value = serde_json::to_value(&response).unwrap();

    let first = &value["results"][0];
    assert_eq!(first["document"]["title"], "Kubernetes Deployment Best Practices");
    assert_eq!(first["matchedKeywords"], json!(["kubernetes"]));
    assert!(first["relevance"].as_f64().unwrap() <= 1.0);
    assert!(value["confidence"].is_number());
}

#[test]
fn ill_typed_query_fails_fast() {
    for query in [json!(null), json!(3), json!(["docker"]), json!({"q": "docker"})] {
        let err = rank_value(&query, &catalog(), None).unwrap_err();
        assert!(
            matches!(err, RankError::InvalidArgument { field: "query", .. }),
            "query {} gave {:?}",
            query,
            err
        );
    }
}

#[test]
fn ill_typed_catalog_fails_fast() {
    for bad in [json!(null), json!("docs"), json!(5)] {
        let err = rank_value(&json!("docker"), &bad, None).unwrap_err();
        assert!(matches!(
            err,
            RankError::InvalidArgument {
                field: "catalog",
                ..
            }
        ));
    }
}

#[test]
fn documents_missing_optional_fields_rank_normally() {
    let catalog = json!([
        {"id": "a", "title": "Docker networking"},
        {"id": "b", "title": "Unrelated", "tags": ["docker"]}
    ]);
    let response = rank_value(&json!("docker"), &catalog, None).unwrap();
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].document.id.as_str(), "a");
}

#[test]
fn unknown_option_keys_are_rejected() {
    let err = rank_value(&json!("docker"), &catalog(), Some(&json!({"limit": 3}))).unwrap_err();
    assert!(matches!(err, RankError::InvalidOption { .. }));
}
