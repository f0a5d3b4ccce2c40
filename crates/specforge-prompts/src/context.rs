use specforge_core::{Document, SpecData, Template};

/// Everything needed to assemble one generation prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub spec: &'a SpecData,
    pub documents: &'a [Document],
    pub templates: &'a [Template],
    pub system_prompt: &'a str,
}

impl PromptContext<'_> {
    pub(crate) fn append_examples(&self, prompt: &mut String) {
        if self.spec.examples.trim().is_empty() {
            return;
        }
        prompt.push_str("Examples/Data Structures:\n");
        prompt.push_str(&self.spec.examples);
        prompt.push_str("\n\n");
    }

    pub(crate) fn append_documents(&self, prompt: &mut String) {
        if self.documents.is_empty() {
            return;
        }
        prompt.push_str("Reference Documents:\n");
        let blocks: Vec<String> = self
            .documents
            .iter()
            .map(|doc| format!("--- {} ---\n{}", doc.name, doc.content))
            .collect();
        prompt.push_str(&blocks.join("\n\n"));
        prompt.push_str("\n\n");
    }

    /// Templates referenced by the current selection, in library order.
    /// Selected ids with no matching template are silently ignored.
    pub fn selected_templates(&self) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| self.spec.selected_templates.iter().any(|id| *id == t.id))
            .collect()
    }

    pub(crate) fn append_templates(&self, prompt: &mut String) {
        let matched = self.selected_templates();
        if matched.is_empty() {
            return;
        }
        prompt.push_str("Template References:\n");
        let blocks: Vec<String> = matched
            .iter()
            .map(|t| format!("--- {} ---\n{}", t.name, t.content))
            .collect();
        prompt.push_str(&blocks.join("\n\n"));
        prompt.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_templates_ignores_unknown_ids() {
        let spec = SpecData {
            title: "T".into(),
            description: "D".into(),
            selected_templates: vec!["ghost".into(), "real".into()],
            ..Default::default()
        };
        let templates = vec![Template {
            id: "real".into(),
            name: "Real".into(),
            content: "body".into(),
            description: None,
        }];
        let ctx = PromptContext {
            spec: &spec,
            documents: &[],
            templates: &templates,
            system_prompt: "",
        };
        let matched = ctx.selected_templates();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "real");
    }
}
