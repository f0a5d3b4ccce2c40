use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded reference document. Created on upload, deleted explicitly,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn create(input: CreateDocument) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            content: input.content,
            upload_date: Utc::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_unique_ids() {
        let a = Document::create(CreateDocument {
            name: "a.txt".into(),
            content: "alpha".into(),
        });
        let b = Document::create(CreateDocument {
            name: "b.md".into(),
            content: "beta".into(),
        });
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "a.txt");
        assert_eq!(b.content, "beta");
    }
}
