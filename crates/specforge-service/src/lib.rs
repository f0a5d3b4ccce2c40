mod backend;

pub use backend::{ChatBackend, MockBackend, MockRequest};

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use specforge_client::ClientError;
use specforge_core::{parse_response, Config, CreateDocument, Document, SpecData, Template};
use specforge_prompts::PromptContext;
use specforge_store::{StateStore, StoreError, TemplateLibrary};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("generation failed: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// Result of one generation: the cleaned document plus the model's
/// separated reasoning, if any.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    pub spec: String,
    pub thinking: String,
}

/// Orchestrates a generation round trip: validate, assemble, call the
/// backend, parse, replace the stored spec. Holds no state of its own.
pub struct SpecService {
    store: Arc<StateStore>,
    templates: Arc<TemplateLibrary>,
    backend: Arc<dyn ChatBackend>,
}

impl SpecService {
    pub fn new(
        store: Arc<StateStore>,
        templates: Arc<TemplateLibrary>,
        backend: Arc<dyn ChatBackend>,
    ) -> Self {
        Self {
            store,
            templates,
            backend,
        }
    }

    // -- Config --

    pub async fn config(&self) -> Config {
        self.store.config().await
    }

    pub async fn set_config(&self, config: Config) -> Result<Config, ServiceError> {
        self.store.set_config(config.clone()).await?;
        Ok(config)
    }

    // -- Documents --

    pub async fn list_documents(&self) -> Vec<Document> {
        self.store.documents().await
    }

    pub async fn upload_document(&self, input: CreateDocument) -> Result<Document, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("document name is required".into()));
        }
        if input.content.is_empty() {
            return Err(ServiceError::InvalidInput("document content is empty".into()));
        }
        Ok(self.store.add_document(Document::create(input)).await?)
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), ServiceError> {
        Ok(self.store.remove_document(id).await?)
    }

    // -- Templates --

    pub fn templates(&self) -> &[Template] {
        self.templates.templates()
    }

    // -- Spec --

    pub async fn spec(&self) -> SpecData {
        self.store.spec().await
    }

    pub async fn set_spec(&self, spec: SpecData) -> Result<SpecData, ServiceError> {
        self.store.set_spec(spec.clone()).await?;
        Ok(spec)
    }

    /// Run one generation. On failure the previously generated spec, if any,
    /// is left untouched.
    pub async fn generate(&self) -> Result<GenerateOutcome, ServiceError> {
        let config = self.store.config().await;
        if !config.is_configured() {
            return Err(ServiceError::NotConfigured(
                "API token and model must be set".into(),
            ));
        }

        let spec = self.store.spec().await;
        if !spec.has_required_fields() {
            return Err(ServiceError::InvalidInput(
                "title and description are required".into(),
            ));
        }

        let documents = self.store.documents().await;
        let ctx = PromptContext {
            spec: &spec,
            documents: &documents,
            templates: self.templates.templates(),
            system_prompt: &config.system_prompt,
        };
        let request = specforge_prompts::assemble(&ctx);

        let raw = self
            .backend
            .complete(
                &config.api_token,
                &config.model,
                &request.system_message,
                &request.user_message,
            )
            .await
            .map_err(|e| match e {
                ClientError::Api(msg) => ServiceError::Upstream(msg),
                other => ServiceError::Upstream(other.to_string()),
            })?;

        let parsed = parse_response(&raw);
        self.store
            .set_generated_spec(parsed.cleaned_response.clone())
            .await?;

        tracing::info!(
            chars = parsed.cleaned_response.len(),
            has_thinking = !parsed.thinking.is_empty(),
            "stored generated specification"
        );

        Ok(GenerateOutcome {
            spec: parsed.cleaned_response,
            thinking: parsed.thinking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specforge_store::{MemoryStatePort, StatePort};

    async fn service_with(backend: Arc<MockBackend>) -> SpecService {
        let port: Arc<dyn StatePort> = Arc::new(MemoryStatePort::new());
        let store = Arc::new(StateStore::load(port).await.unwrap());
        SpecService::new(store, Arc::new(TemplateLibrary::empty()), backend)
    }

    async fn configure(service: &SpecService) {
        let mut config = service.config().await;
        config.api_token = "tok".into();
        config.model = "llama-3-70b".into();
        service.set_config(config).await.unwrap();
    }

    async fn set_form(service: &SpecService, title: &str, description: &str) {
        let mut spec = service.spec().await;
        spec.title = title.into();
        spec.description = description.into();
        service.set_spec(spec).await.unwrap();
    }

    #[tokio::test]
    async fn generate_requires_configuration() {
        let service = service_with(Arc::new(MockBackend::success("out"))).await;
        set_form(&service, "Widget API", "Defines Widget CRUD").await;

        let err = service.generate().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn generate_requires_title_and_description() {
        let service = service_with(Arc::new(MockBackend::success("out"))).await;
        configure(&service).await;
        set_form(&service, "Widget API", "   ").await;

        let err = service.generate().await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn generate_parses_and_stores_cleaned_reply() {
        let backend = Arc::new(MockBackend::success(
            "<think>considering options</think>## Overview\nThis spec...",
        ));
        let service = service_with(backend.clone()).await;
        configure(&service).await;
        set_form(&service, "Widget API", "Defines Widget CRUD").await;

        let outcome = service.generate().await.unwrap();
        assert_eq!(outcome.spec, "## Overview\nThis spec...");
        assert_eq!(outcome.thinking, "considering options");
        assert_eq!(service.spec().await.generated_spec, "## Overview\nThis spec...");

        let request = backend.last_request().unwrap();
        assert_eq!(request.model, "llama-3-70b");
        assert!(request.user.contains("Title: Widget API"));
        assert!(request.user.contains("Description:\nDefines Widget CRUD"));
        assert!(!request.user.contains("Reference Documents:"));
        assert!(!request.user.contains("Template References:"));
    }

    #[tokio::test]
    async fn generate_includes_uploaded_documents() {
        let backend = Arc::new(MockBackend::success("done"));
        let service = service_with(backend.clone()).await;
        configure(&service).await;
        set_form(&service, "Widget API", "Defines Widget CRUD").await;

        service
            .upload_document(CreateDocument {
                name: "a.txt".into(),
                content: "alpha".into(),
            })
            .await
            .unwrap();
        service
            .upload_document(CreateDocument {
                name: "b.md".into(),
                content: "beta".into(),
            })
            .await
            .unwrap();

        service.generate().await.unwrap();

        let user = backend.last_request().unwrap().user;
        assert!(user.contains("Reference Documents:"));
        let a = user.find("--- a.txt ---").unwrap();
        let b = user.find("--- b.md ---").unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn upstream_failure_preserves_previous_spec() {
        let service = service_with(Arc::new(MockBackend::success("first draft"))).await;
        configure(&service).await;
        set_form(&service, "Widget API", "Defines Widget CRUD").await;
        service.generate().await.unwrap();

        // Same store, failing backend this time.
        let failing = SpecService::new(
            Arc::clone(&service.store),
            Arc::new(TemplateLibrary::empty()),
            Arc::new(MockBackend::failure("invalid api token")),
        );
        let err = failing.generate().await.unwrap_err();
        match err {
            ServiceError::Upstream(msg) => assert_eq!(msg, "invalid api token"),
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert_eq!(failing.spec().await.generated_spec, "first draft");
    }

    #[tokio::test]
    async fn upload_rejects_blank_name() {
        let service = service_with(Arc::new(MockBackend::success("x"))).await;
        let err = service
            .upload_document(CreateDocument {
                name: "  ".into(),
                content: "body".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn delete_unknown_document_is_not_found() {
        let service = service_with(Arc::new(MockBackend::success("x"))).await;
        let err = service.delete_document("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
