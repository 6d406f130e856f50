pub mod core;

pub use crate::core::document::extract_document_text;
pub use crate::core::models::{ParsedProfile, Project, WorkExperience};
pub use crate::core::parser::ResumeParser;
