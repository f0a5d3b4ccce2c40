pub mod config;
pub mod document;
pub mod parser;
pub mod spec;
pub mod template;

pub use config::Config;
pub use document::{CreateDocument, Document};
pub use parser::{parse_response, ParsedResponse};
pub use spec::SpecData;
pub use template::{Template, TemplateEntry};
