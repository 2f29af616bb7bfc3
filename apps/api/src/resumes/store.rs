//! Résumé store — owned in-memory map with a one-file-per-record JSON mirror.
//!
//! The mirror is write-only: nothing is read back from disk, so after a
//! restart `list`/`get` are empty until the next save.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::resume::ResumeRecord;
use crate::resumes::id::{format_timestamp, IdStrategy};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resume {0} not found")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a successful save.
#[derive(Debug, Clone)]
pub struct SavedResume {
    pub id: String,
    pub saved_at: String,
    pub path: PathBuf,
}

pub struct ResumeStore {
    records: RwLock<BTreeMap<String, ResumeRecord>>,
    storage_dir: PathBuf,
    id_strategy: IdStrategy,
}

impl ResumeStore {
    pub fn new(storage_dir: impl Into<PathBuf>, id_strategy: IdStrategy) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            storage_dir: storage_dir.into(),
            id_strategy,
        }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Path of the mirror file for `id`.
    pub fn file_path(&self, id: &str) -> PathBuf {
        self.storage_dir.join(format!("{id}.json"))
    }

    pub async fn save(&self, record: ResumeRecord) -> Result<SavedResume, StoreError> {
        self.save_at(record, Local::now().naive_local()).await
    }

    /// Saves `record` as of `now`.
    ///
    /// The write lock is held across the file write and the map insert, so
    /// memory and disk always agree on the last writer for a given id. If the
    /// file cannot be written the map is left unchanged.
    pub async fn save_at(
        &self,
        mut record: ResumeRecord,
        now: NaiveDateTime,
    ) -> Result<SavedResume, StoreError> {
        let id = self.id_strategy.generate(now);
        let saved_at = format_timestamp(now);
        record.created_at = Some(saved_at.clone());
        record.updated_at = Some(saved_at.clone());

        let mut records = self.records.write().await;
        let path = self.persist(&id, &record).await?;
        if records.insert(id.clone(), record).is_some() {
            warn!("Resume {id} overwritten by a save in the same second");
        }

        info!("Saved resume {id} to {}", path.display());
        Ok(SavedResume { id, saved_at, path })
    }

    /// All known ids in ascending order.
    pub async fn list(&self) -> Vec<String> {
        self.records.read().await.keys().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<ResumeRecord, StoreError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Writes `<id>.json` via a temporary sibling and a rename, so the final
    /// file is either the complete new record or untouched.
    async fn persist(&self, id: &str, record: &ResumeRecord) -> Result<PathBuf, StoreError> {
        if fs::metadata(&self.storage_dir).await.is_err() {
            debug!("Creating storage directory {}", self.storage_dir.display());
        }
        fs::create_dir_all(&self.storage_dir).await?;

        let body = serde_json::to_vec_pretty(record)?;
        let path = self.file_path(id);
        let tmp = self.storage_dir.join(format!("{id}.json.tmp"));

        fs::write(&tmp, &body).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(path)
    }
}
