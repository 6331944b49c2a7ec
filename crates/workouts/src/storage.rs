use bytes::Bytes;
use object_store::{
    ObjectStore, PutOptions, local::LocalFileSystem, memory::InMemory, path::Path,
};
use std::sync::Arc;

use crate::errors::WorkoutError;

/// Durable key-value blob store backed by `object_store`.
#[derive(Clone, Debug)]
pub struct KeyValueStore {
    store: Arc<dyn ObjectStore>,
}

impl KeyValueStore {
    /// Stores values as files under `base_path`, creating it if needed.
    pub fn new_local(base_path: &str) -> Result<Self, WorkoutError> {
        std::fs::create_dir_all(base_path)?;
        let store = Arc::new(LocalFileSystem::new_with_prefix(base_path)?);
        Ok(Self { store })
    }

    /// Process-local store, lost on drop.
    pub fn new_in_memory() -> Self {
        Self {
            store: Arc::new(InMemory::new()),
        }
    }

    /// Returns `None` when the key is absent.
    pub async fn get(&self, key: &str) -> Result<Option<Bytes>, WorkoutError> {
        let path = Path::from(key);

        let result = match self.store.get(&path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(result.bytes().await?))
    }

    pub async fn put(&self, key: &str, content: Bytes) -> Result<(), WorkoutError> {
        let path = Path::from(key);

        self.store
            .put_opts(&path, content.into(), PutOptions::default())
            .await?;

        Ok(())
    }

    /// Removes the key. Removing an absent key succeeds.
    pub async fn delete(&self, key: &str) -> Result<(), WorkoutError> {
        let path = Path::from(key);

        match self.store.delete(&path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn contains(&self, key: &str) -> Result<bool, WorkoutError> {
        let path = Path::from(key);

        match self.store.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
