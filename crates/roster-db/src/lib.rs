//! Database access layer for the `students` table
//!
//! Uses an existing PostgreSQL schema - NO migrations.
//! Every operation opens its own connection, runs one statement and
//! closes the connection again before returning.

pub mod client;
pub mod outcome;
pub mod queries;
pub mod repository;
pub mod schema;

pub use client::*;
pub use outcome::*;
pub use queries::*;
pub use repository::*;
pub use schema::*;

use thiserror::Error;

/// Storage faults that are not handled close to the operation.
///
/// Connection failures and unique violations are reported through
/// [`Outcome`] instead.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database query error: {0}")]
    Query(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
