//! Error types for Bookshelf
//!
//! Provides a unified error type for all operations.
//!
//! Lookups that miss and borrow/return on a book in the wrong state are
//! not errors; they come back as [`Outcome`](crate::command::Outcome) values.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Load Errors
    // -------------------------------------------------------------------------
    #[error("Catalog file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Invalid genre index: {0}")]
    InvalidGenre(usize),

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Invalid ISBN '{0}': expected 13 digits (format 999-9999999999)")]
    InvalidIsbn(String),

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("Permission denied: {0} requires the librarian role")]
    PermissionDenied(&'static str),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
