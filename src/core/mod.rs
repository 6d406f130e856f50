pub mod contact;
pub mod dates;
pub mod document;
pub mod education;
pub mod errors;
pub mod experience;
pub mod identity;
pub mod models;
pub mod parser;
pub mod projects;
pub mod section;
pub mod skills;
