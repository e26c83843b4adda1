//! Domain layer: models, the row-to-detail fold and the student service.

pub mod details;
pub mod models;
pub mod student_service;
