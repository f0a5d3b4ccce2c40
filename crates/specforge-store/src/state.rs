use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use specforge_core::{Config, Document, SpecData};

use crate::{StatePort, StoreError, CONFIG_KEY, DOCUMENTS_KEY, SPEC_KEY};

struct AppData {
    config: Config,
    documents: Vec<Document>,
    spec: SpecData,
}

/// Explicit state store: loads config, documents, and the current spec from
/// the persistence port at init and saves the affected key on every change.
pub struct StateStore {
    port: Arc<dyn StatePort>,
    inner: RwLock<AppData>,
}

impl StateStore {
    pub async fn load(port: Arc<dyn StatePort>) -> Result<Self, StoreError> {
        let config = load_json(&*port, CONFIG_KEY).await?;
        let documents = load_json(&*port, DOCUMENTS_KEY).await?;
        let spec = load_json(&*port, SPEC_KEY).await?;
        Ok(Self {
            port,
            inner: RwLock::new(AppData {
                config,
                documents,
                spec,
            }),
        })
    }

    // -- Config --

    pub async fn config(&self) -> Config {
        self.inner.read().await.config.clone()
    }

    pub async fn set_config(&self, config: Config) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        self.persist(CONFIG_KEY, &config).await?;
        data.config = config;
        Ok(())
    }

    // -- Documents --

    pub async fn documents(&self) -> Vec<Document> {
        self.inner.read().await.documents.clone()
    }

    pub async fn add_document(&self, doc: Document) -> Result<Document, StoreError> {
        let mut data = self.inner.write().await;
        data.documents.push(doc.clone());
        let result = self.persist(DOCUMENTS_KEY, &data.documents).await;
        if result.is_err() {
            data.documents.pop();
        }
        result.map(|_| doc)
    }

    pub async fn remove_document(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        if !data.documents.iter().any(|d| d.id == id) {
            return Err(StoreError::NotFound(format!("document {id}")));
        }
        let remaining: Vec<Document> = data
            .documents
            .iter()
            .filter(|d| d.id != id)
            .cloned()
            .collect();
        self.persist(DOCUMENTS_KEY, &remaining).await?;
        data.documents = remaining;
        Ok(())
    }

    // -- Spec --

    pub async fn spec(&self) -> SpecData {
        self.inner.read().await.spec.clone()
    }

    pub async fn set_spec(&self, spec: SpecData) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        self.persist(SPEC_KEY, &spec).await?;
        data.spec = spec;
        Ok(())
    }

    /// Replace only the generated output, keeping the form fields as-is.
    pub async fn set_generated_spec(&self, generated: String) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        let mut spec = data.spec.clone();
        spec.generated_spec = generated;
        self.persist(SPEC_KEY, &spec).await?;
        data.spec = spec;
        Ok(())
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Internal(format!("serialize {key}: {e}")))?;
        self.port.save(key, &raw).await
    }
}

/// Missing or unreadable state falls back to the default value; a corrupt
/// file must not brick the app.
async fn load_json<T: DeserializeOwned + Default>(
    port: &dyn StatePort,
    key: &str,
) -> Result<T, StoreError> {
    match port.load(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, "discarding corrupt state: {e}");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}
