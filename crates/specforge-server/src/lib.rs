mod routes;
pub mod test_helpers;

pub use routes::{build_router, AppState, InnerAppState};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;

use specforge_client::ChatClient;
use specforge_service::{ChatBackend, SpecService};
use specforge_store::{StatePort, StateStore, TemplateLibrary};

/// Wire up the application state: load persisted UI state, load the
/// template library, and point both outbound clients at `chat_url`.
pub async fn init_state(
    state_port: Arc<dyn StatePort>,
    templates_dir: &Path,
    chat_url: &str,
) -> Result<AppState> {
    let store = Arc::new(StateStore::load(state_port).await?);
    let templates = Arc::new(TemplateLibrary::load(templates_dir).await);
    tracing::info!(count = templates.len(), "template library loaded");

    let backend: Arc<dyn ChatBackend> = Arc::new(ChatClient::with_base_url(chat_url));
    let service = SpecService::new(store, templates, backend);
    let chat = ChatClient::with_base_url(chat_url);

    Ok(Arc::new(InnerAppState { service, chat }))
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
