//! In-memory backend for unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{BoxError, ObjectStore, PutOptions};

#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object directly, bypassing the trait.
    pub async fn insert(&self, key: impl Into<String>, data: Vec<u8>) {
        self.objects.write().await.insert(key.into(), data);
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn put_object(&self, key: &str, data: &[u8], _opts: &PutOptions) -> Result<(), BoxError> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
