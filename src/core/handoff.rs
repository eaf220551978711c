// src/core/handoff.rs
//! Cross-page payload handoff: a named key/value slot that outlives the submitting page

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

use crate::core::FsOps;
use crate::types::AnalysisResult;

/// Slot holding the JSON-serialized analysis between upload and results view
pub const ANALYSIS_SLOT: &str = "resumeAnalysis";

#[async_trait]
pub trait HandoffStore: Send + Sync {
    async fn write(&self, slot: &str, value: &str) -> Result<()>;
    async fn read(&self, slot: &str) -> Result<Option<String>>;
}

/// Persist the payload for the results view. Overwrites whatever an earlier upload left.
pub async fn store_analysis(store: &dyn HandoffStore, result: &AnalysisResult) -> Result<()> {
    let json = result.to_json()?;
    store
        .write(ANALYSIS_SLOT, &json)
        .await
        .context("Failed to persist analysis for the results view")
}

/// One file per slot under a storage directory
pub struct FileHandoffStore {
    dir: PathBuf,
}

impl FileHandoffStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

#[async_trait]
impl HandoffStore for FileHandoffStore {
    async fn write(&self, slot: &str, value: &str) -> Result<()> {
        let path = self.slot_path(slot);
        FsOps::write_file_safe(&path, value).await?;
        info!("Stored handoff slot '{}' at {}", slot, path.display());
        Ok(())
    }

    async fn read(&self, slot: &str) -> Result<Option<String>> {
        FsOps::read_optional(&self.slot_path(slot)).await
    }
}

/// In-process store, for embedding the flow where nothing needs to survive a restart
#[derive(Default)]
pub struct MemoryHandoffStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryHandoffStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoffStore for MemoryHandoffStore {
    async fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .map_err(|_| anyhow::anyhow!("Handoff store lock poisoned"))?
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("Handoff store lock poisoned"))?
            .get(slot)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(score: f64) -> AnalysisResult {
        AnalysisResult::from_value(json!({"role": "Engineer", "score": score})).unwrap()
    }

    #[tokio::test]
    async fn test_file_store_overwrites_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHandoffStore::new(dir.path().join("storage"));

        assert!(store.read(ANALYSIS_SLOT).await.unwrap().is_none());

        store_analysis(&store, &sample(40.0)).await.unwrap();
        store_analysis(&store, &sample(90.0)).await.unwrap();

        let raw = store.read(ANALYSIS_SLOT).await.unwrap().unwrap();
        assert_eq!(AnalysisResult::from_json(&raw).unwrap().score, 90.0);
    }

    #[tokio::test]
    async fn test_memory_store_slots_are_independent() {
        let store = MemoryHandoffStore::new();
        store.write("a", "1").await.unwrap();
        assert_eq!(store.read("a").await.unwrap().as_deref(), Some("1"));
        assert!(store.read("b").await.unwrap().is_none());
    }
}
