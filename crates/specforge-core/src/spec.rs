use serde::{Deserialize, Serialize};

/// The working specification: form fields plus the last generated output.
/// Replaced wholesale after each successful generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecData {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub examples: String,
    #[serde(default)]
    pub selected_templates: Vec<String>,
    #[serde(default)]
    pub generated_spec: String,
}

impl SpecData {
    /// Title and description must be non-blank before generation may run.
    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_whitespace() {
        let mut spec = SpecData::default();
        assert!(!spec.has_required_fields());

        spec.title = "  ".into();
        spec.description = "\n".into();
        assert!(!spec.has_required_fields());

        spec.title = "Widget API".into();
        spec.description = "Defines Widget CRUD".into();
        assert!(spec.has_required_fields());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let spec: SpecData =
            serde_json::from_str(r#"{"title":"T","description":"D"}"#).unwrap();
        assert_eq!(spec.title, "T");
        assert!(spec.examples.is_empty());
        assert!(spec.selected_templates.is_empty());
        assert!(spec.generated_spec.is_empty());
    }
}
