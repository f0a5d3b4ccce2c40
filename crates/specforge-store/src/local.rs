use std::path::PathBuf;

use async_trait::async_trait;

use crate::{StatePort, StoreError};

/// Filesystem-backed persistence port. One JSON file per key under a
/// data directory.
pub struct LocalStatePort {
    base_dir: PathBuf,
}

impl LocalStatePort {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn default_dir() -> Self {
        Self {
            base_dir: default_data_dir(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn resolve(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

fn default_data_dir() -> PathBuf {
    let base = if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    };
    base.join("specforge")
}

#[async_trait]
impl StatePort for LocalStatePort {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.resolve(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Internal(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn save(&self, key: &str, data: &str) -> Result<(), StoreError> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Internal(format!("mkdir: {e}")))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| StoreError::Internal(format!("write {}: {e}", path.display())))
    }
}
