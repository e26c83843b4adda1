//! SQLite-backed storage: connection management and repositories.

pub mod db;
pub mod group_repository;
pub mod student_repository;

pub use db::DbConnection;
