//! # Bookshelf
//!
//! A small catalog manager for a library's book collection:
//! - Loads book records from a CSV file
//! - Search, borrow and return for every visitor
//! - Add, remove and full listing for librarians
//! - Saves the catalog back to the same file on exit
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Interactive Shell / CLI                      │
//! │              (Guest or Librarian role)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Catalog                                 │
//! │           (ordered Vec<Book>, linear scans)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load once / save once
//!                       ▼
//!               ┌───────────────┐
//!               │    Storage    │
//!               │     (CSV)     │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod command;
pub mod catalog;
pub mod storage;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::Config;
pub use catalog::Catalog;
pub use command::{Command, Outcome, Role};
pub use model::{Book, Genre};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
