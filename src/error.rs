//! Table error types.

use thiserror::Error;

/// Errors surfaced to callers of the table controller.
///
/// Malformed cell input and empty history are not errors; they are reported
/// through `EditOutcome::Rejected` and `false` returns instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Sort direction other than "asc" or "desc"
    #[error("Unsupported sort direction '{0}' (expected \"asc\" or \"desc\")")]
    InvalidSortDirection(String),

    /// Column name that matches none of the record fields
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// Embedded seed data failed to parse
    #[error("Invalid seed data: {0}")]
    SeedData(String),

    /// Configuration override failed to parse
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
