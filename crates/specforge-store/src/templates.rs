use std::path::Path;

use specforge_core::{Template, TemplateEntry};

/// Read-only template library, loaded once at startup from a directory
/// holding `index.json` plus one content file per entry.
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Load the index and resolve each entry's content file. A missing index
    /// yields an empty library; an entry whose file cannot be read is
    /// skipped, not fatal.
    pub async fn load(dir: &Path) -> Self {
        let index_path = dir.join("index.json");
        let raw = match tokio::fs::read_to_string(&index_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no template index at {}", index_path.display());
                return Self::empty();
            }
            Err(e) => {
                tracing::warn!("failed to read template index: {e}");
                return Self::empty();
            }
        };

        let entries: Vec<TemplateEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("invalid template index: {e}");
                return Self::empty();
            }
        };

        let mut templates = Vec::new();
        for entry in entries {
            match tokio::fs::read_to_string(dir.join(&entry.file)).await {
                Ok(content) => templates.push(Template {
                    id: entry.id,
                    name: entry.name,
                    content,
                    description: entry.description,
                }),
                Err(e) => {
                    tracing::warn!(template = %entry.id, file = %entry.file, "skipping template: {e}");
                }
            }
        }

        Self { templates }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
