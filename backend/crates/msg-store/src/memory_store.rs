use crate::{Result as StoreResult, UserStore};

use msg_core::{RecordBody, UserKey};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

/// Process-local user store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    entries: Arc<RwLock<HashMap<UserKey, Value>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arbitrary value, bypassing the record shape.
    pub async fn insert_raw(&self, key: UserKey, value: Value) {
        self.entries.write().await.insert(key, value);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Keys currently stored, sorted.
    pub async fn keys(&self) -> Vec<UserKey> {
        let mut keys: Vec<UserKey> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, key: &UserKey) -> StoreResult<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &UserKey, body: &RecordBody) -> StoreResult<()> {
        let value = serde_json::to_value(body)?;
        self.entries.write().await.insert(key.clone(), value);
        Ok(())
    }
}
