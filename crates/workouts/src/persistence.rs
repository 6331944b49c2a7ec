//! Persistence contract for the workout collection.
//!
//! The whole collection is written on every save (O(n) per write). For a
//! single user's list that keeps the stored copy trivially consistent with
//! memory.

use async_trait::async_trait;
use bytes::Bytes;

use crate::{errors::WorkoutError, models::WorkoutRecord, storage::KeyValueStore};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "workouts";

#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Overwrites the stored collection with `records`.
    async fn save(&self, records: &[WorkoutRecord]) -> Result<(), WorkoutError>;

    /// Reads the stored collection. An absent or unparseable value yields an
    /// empty collection; only a failed read is an error.
    async fn load(&self) -> Result<Vec<WorkoutRecord>, WorkoutError>;

    /// Removes the stored value entirely.
    async fn clear(&self) -> Result<(), WorkoutError>;
}

/// Stores the collection as a JSON array under a single key.
#[derive(Clone, Debug)]
pub struct JsonPersistence {
    kv: KeyValueStore,
    key: String,
}

impl JsonPersistence {
    pub fn new(kv: KeyValueStore) -> Self {
        Self::with_key(kv, DEFAULT_KEY)
    }

    pub fn with_key(kv: KeyValueStore, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &KeyValueStore {
        &self.kv
    }
}

#[async_trait]
impl PersistenceAdapter for JsonPersistence {
    async fn save(&self, records: &[WorkoutRecord]) -> Result<(), WorkoutError> {
        let body = serde_json::to_vec(records)?;
        self.kv.put(&self.key, Bytes::from(body)).await?;
        tracing::debug!(key = %self.key, count = records.len(), "Saved workouts");
        Ok(())
    }

    async fn load(&self) -> Result<Vec<WorkoutRecord>, WorkoutError> {
        let Some(body) = self.kv.get(&self.key).await? else {
            tracing::debug!(key = %self.key, "No stored workouts");
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<WorkoutRecord>>(&body) {
            Ok(records) => {
                tracing::info!(key = %self.key, count = records.len(), "Loaded workouts");
                Ok(records)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "Ignoring malformed stored workouts: {e}");
                Ok(Vec::new())
            }
        }
    }

    async fn clear(&self) -> Result<(), WorkoutError> {
        self.kv.delete(&self.key).await?;
        tracing::debug!(key = %self.key, "Cleared stored workouts");
        Ok(())
    }
}
