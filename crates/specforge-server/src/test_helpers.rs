//! Router construction helpers for tests: in-memory state port, empty or
//! preloaded template library, scripted chat backend.

use std::sync::Arc;

use specforge_client::ChatClient;
use specforge_service::{ChatBackend, MockBackend, SpecService};
use specforge_store::{MemoryStatePort, StatePort, StateStore, TemplateLibrary};

use crate::{AppState, InnerAppState};

/// Build app state with an in-memory port, the given template library, and
/// a mock backend. Returns the backend alongside so tests can inspect the
/// assembled prompt.
pub async fn test_state_with(
    templates: TemplateLibrary,
    backend: MockBackend,
) -> (AppState, Arc<MockBackend>) {
    let port: Arc<dyn StatePort> = Arc::new(MemoryStatePort::new());
    let store = Arc::new(StateStore::load(port).await.unwrap());
    let backend = Arc::new(backend);
    let service = SpecService::new(
        store,
        Arc::new(templates),
        Arc::clone(&backend) as Arc<dyn ChatBackend>,
    );
    let state = Arc::new(InnerAppState {
        service,
        chat: ChatClient::new(),
    });
    (state, backend)
}

pub async fn test_state(backend: MockBackend) -> (AppState, Arc<MockBackend>) {
    test_state_with(TemplateLibrary::empty(), backend).await
}
