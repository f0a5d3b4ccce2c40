use serde::{Deserialize, Serialize};

/// A static reference template, offered as optional context for generation.
/// Loaded read-only from the template index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One row of the static template index (`index.json`). The `file` field is
/// resolved to the template's textual content at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
    pub name: String,
    pub file: String,
    #[serde(default)]
    pub description: Option<String>,
}
