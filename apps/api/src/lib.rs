pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod schema;

pub use models::resume::Resume;
pub use schema::{validate_resume, ValidationReport, Violation, ViolationKind};
