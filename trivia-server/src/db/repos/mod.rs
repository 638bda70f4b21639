//! Repository implementations for database access
//!
//! One statement per operation; integrity is left to table constraints.

pub mod categories;
pub mod questions;

pub use super::store::DbError;
pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
