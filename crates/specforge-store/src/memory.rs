use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{StatePort, StoreError};

/// In-memory persistence port for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStatePort {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStatePort {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatePort for MemoryStatePort {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &str, data: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_string());
        Ok(())
    }
}
