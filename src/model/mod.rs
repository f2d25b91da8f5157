//! Record Model
//!
//! The book entity and the values it is built from.
//!
//! ## Responsibilities
//! - Hold a single record: isbn, title, author, genre, availability
//! - Keep the genre index inside the fixed genre list
//! - Render a record as a fixed-width listing row
//! - Check the shape of ISBNs typed at a prompt

mod book;
mod genre;
pub mod isbn;

pub use book::Book;
pub use genre::{Genre, GENRES};
