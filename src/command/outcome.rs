//! Outcome definitions
//!
//! What running a command produced. Misses and invalid state transitions
//! are ordinary outcomes here, not errors.

use std::fmt;

use crate::model::Book;

/// Result of a borrow/return/add/remove on a single book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Borrowed,
    NotAvailable,
    Returned,
    NotBorrowed,
    Added,
    Removed,
}

/// The outcome of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single book was acted on (or found in the wrong state)
    Book {
        status: Status,
        title: String,
        isbn: String,
    },

    /// No book carries the requested isbn
    NotFound,

    /// Search results, in catalog order
    Matches(Vec<Book>),

    /// Rendered catalog listing
    Listing(String),
}

impl Outcome {
    pub(crate) fn book(status: Status, book: &Book) -> Self {
        Outcome::Book {
            status,
            title: book.title().to_string(),
            isbn: book.isbn().to_string(),
        }
    }

    /// The single-book status, if this outcome carries one
    pub fn status(&self) -> Option<&Status> {
        match self {
            Outcome::Book { status, .. } => Some(status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Book { status, title, isbn } => {
                let verb = match status {
                    Status::Borrowed => "successfully borrowed",
                    Status::NotAvailable => "is not currently available",
                    Status::Returned => "successfully returned",
                    Status::NotBorrowed => "is not currently borrowed",
                    Status::Added => "successfully added",
                    Status::Removed => "successfully removed",
                };
                write!(f, "'{}' with ISBN {} {}.", title, isbn, verb)
            }
            Outcome::NotFound => f.write_str("No book found with that ISBN."),
            Outcome::Matches(books) if books.is_empty() => {
                f.write_str("No matching books found.")
            }
            Outcome::Matches(books) => {
                f.write_str(&Book::header())?;
                for (i, book) in books.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", book)?;
                }
                Ok(())
            }
            Outcome::Listing(listing) => f.write_str(listing.trim_end_matches('\n')),
        }
    }
}
