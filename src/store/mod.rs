//! Submission persistence.
//!
//! Storage is an independent best-effort channel: the REST handlers inspect
//! the returned `Result` only to log it, never to fail the request.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Durable record of accepted submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist one document into the named collection, returning its id.
    async fn insert(&self, collection: &str, document: &Value) -> Result<String>;
}

/// Document store writing one pretty-printed JSON file per submission under
/// `<root>/<collection>/<uuid>.json`.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn insert(&self, collection: &str, document: &Value) -> Result<String> {
        let dir = self.collection_path(collection);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create collection directory {}", dir.display()))?;

        let id = Uuid::new_v4().to_string();
        let path = dir.join(format!("{}.json", id));
        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize submission document")?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write submission document {}", path.display()))?;

        tracing::info!(collection, id = %id, "Submission persisted");
        Ok(id)
    }
}
