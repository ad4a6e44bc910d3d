// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where candidate documents come from.
//!
//! The suggestion panel ships with five built-in articles so it works before a
//! knowledge base is wired up. Real deployments load a JSON array of documents
//! instead; see [`Catalog::from_json_str`].
//!
//! # JSON shape
//!
//! ```json
//! [
//!   { "id": "kb-1", "title": "…", "preview": "…", "tags": ["…"], "trending": true }
//! ]
//! ```
//!
//! `body` and `preview` are interchangeable. Everything but `id` and `title`
//! may be omitted.

use crate::error::RankError;
use crate::types::Document;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// The five built-in articles.
pub fn reference_catalog() -> Vec<Document> {
    vec![
        Document::new("1", "Kubernetes Deployment Best Practices")
            .with_body(
                "Learn the essential practices for rolling out workloads on Kubernetes, \
                 including resource limits, health checks, and rollout strategies.",
            )
            .with_tags(["kubernetes", "containers", "deployment", "devops"])
            .trending(true),
        Document::new("2", "CI/CD Pipeline Setup Guide")
            .with_body(
                "Step-by-step guide to building a continuous integration pipeline \
                 with automated tests, build caching, and release gates.",
            )
            .with_tags(["ci/cd", "automation", "jenkins", "gitlab"])
            .trending(false),
        Document::new("3", "Troubleshooting Container Issues")
            .with_body(
                "Common container problems and how to fix them: crash loops, \
                 image pull errors, networking failures, and memory pressure.",
            )
            .with_tags(["docker", "debugging", "troubleshooting"])
            .trending(true),
        Document::new("4", "Microservices Architecture Guide")
            .with_body(
                "Design patterns for service boundaries, inter-service communication, \
                 data ownership, and resilience in distributed systems.",
            )
            .with_tags(["microservices", "architecture", "design patterns"])
            .trending(false),
        Document::new("5", "Docker Compose Best Practices")
            .with_body(
                "Structure multi-container applications with Compose files, \
                 environment overrides, volumes, and service dependencies.",
            )
            .with_tags(["docker", "docker-compose", "containers"])
            .trending(true),
    ]
}

/// A validated, owned list of documents.
///
/// Ids are unique. Order is preserved; it's the tie-break order for ranking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    docs: Vec<Document>,
}

impl Catalog {
    /// The built-in reference articles.
    pub fn reference() -> Self {
        Catalog {
            docs: reference_catalog(),
        }
    }

    /// Build a catalog from documents, rejecting duplicate ids.
    pub fn new(docs: Vec<Document>) -> Result<Self, RankError> {
        let mut seen = HashSet::with_capacity(docs.len());
        for (index, doc) in docs.iter().enumerate() {
            if !seen.insert(doc.id.as_str()) {
                return Err(RankError::InvalidDocument {
                    index,
                    reason: format!("duplicate id `{}`", doc.id),
                });
            }
        }
        Ok(Catalog { docs })
    }

    /// Parse a JSON array of documents.
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| RankError::Catalog(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validate an already-parsed JSON value as a catalog.
    pub fn from_value(value: &Value) -> Result<Self, RankError> {
        let docs = crate::input::documents_from_value(value)?;
        Self::new(docs)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RankError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.docs
    }
}

impl AsRef<[Document]> for Catalog {
    fn as_ref(&self) -> &[Document] {
        &self.docs
    }
}
