mod local;
mod memory;
mod state;
mod templates;

pub use local::LocalStatePort;
pub use memory::MemoryStatePort;
pub use state::StateStore;
pub use templates::TemplateLibrary;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// Persistence port for UI state blobs, keyed by name.
///
/// The state store loads each key once at init and saves on every change;
/// the core functions never touch this trait.
#[async_trait]
pub trait StatePort: Send + Sync {
    /// Read a blob. `None` when the key has never been saved.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write (create or overwrite) a blob.
    async fn save(&self, key: &str, data: &str) -> Result<(), StoreError>;
}

// -- Keys --
// These mirror the keys the browser build kept in local storage.

pub const CONFIG_KEY: &str = "spec-config.json";
pub const DOCUMENTS_KEY: &str = "spec-documents.json";
pub const SPEC_KEY: &str = "current-spec.json";
