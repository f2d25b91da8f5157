//! Catalog Module
//!
//! The ordered, in-memory collection of books for one session.
//!
//! ## Responsibilities
//! - Own every record loaded from the catalog file
//! - Look up, search, borrow, return, add and remove books
//! - Route typed commands, enforcing the role each one requires
//! - Render the full listing
//!
//! All lookups are linear scans in catalog order. ISBNs are not treated as a
//! key: duplicates are allowed and every isbn operation acts on the first match.

use crate::command::{Command, Outcome, Role, Status};
use crate::error::{CatalogError, Result};
use crate::model::{Book, Genre};

/// The book catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from already built records, keeping their order
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Execute a command on behalf of a session with `role`
    ///
    /// Librarian-only commands from a guest fail with `PermissionDenied`
    /// and leave the catalog untouched.
    pub fn execute(&mut self, command: Command, role: Role) -> Result<Outcome> {
        let command_type = command.command_type();
        if !role.allows(command_type.required_role()) {
            tracing::warn!("{} denied {} command", role, command_type.name());
            return Err(CatalogError::PermissionDenied(command_type.name()));
        }

        tracing::debug!("Executing {} command as {}", command_type.name(), role);

        match command {
            Command::Search { query } => Ok(Outcome::Matches(
                self.search(&query).into_iter().cloned().collect(),
            )),
            Command::Borrow { isbn } => Ok(self.borrow(&isbn)),
            Command::Return { isbn } => Ok(self.return_book(&isbn)),
            Command::Add {
                isbn,
                title,
                author,
                genre,
            } => self.add(isbn, title, author, &genre),
            Command::Remove { isbn } => Ok(self.remove(&isbn)),
            Command::List => Ok(Outcome::Listing(self.list_all())),
        }
    }

    /// First book whose isbn equals `isbn` exactly
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    /// Books whose title, author, genre name or isbn contains `text`,
    /// ignoring case
    ///
    /// An empty query matches every book.
    pub fn search(&self, text: &str) -> Vec<&Book> {
        let needle = text.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title().to_lowercase().contains(&needle)
                    || book.author().to_lowercase().contains(&needle)
                    || book.genre_name().to_lowercase().contains(&needle)
                    || book.isbn().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Borrow a book if it is currently available
    pub fn borrow(&mut self, isbn: &str) -> Outcome {
        let Some(book) = self.find_by_isbn_mut(isbn) else {
            return Outcome::NotFound;
        };

        if book.is_available() {
            book.borrow();
            Outcome::book(Status::Borrowed, book)
        } else {
            Outcome::book(Status::NotAvailable, book)
        }
    }

    /// Return a book if it is currently borrowed
    pub fn return_book(&mut self, isbn: &str) -> Outcome {
        let Some(book) = self.find_by_isbn_mut(isbn) else {
            return Outcome::NotFound;
        };

        if book.is_available() {
            Outcome::book(Status::NotBorrowed, book)
        } else {
            book.return_item();
            Outcome::book(Status::Returned, book)
        }
    }

    /// Append a new, available book
    ///
    /// `genre` must exactly match a genre name. The isbn is taken as given;
    /// format checks belong to whoever collected it.
    pub fn add(
        &mut self,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: &str,
    ) -> Result<Outcome> {
        let genre =
            Genre::from_name(genre).ok_or_else(|| CatalogError::UnknownGenre(genre.to_string()))?;

        let book = Book::with_genre(isbn, title, author, genre, true);
        let outcome = Outcome::book(Status::Added, &book);
        self.books.push(book);

        Ok(outcome)
    }

    /// Remove the first book with this isbn
    pub fn remove(&mut self, isbn: &str) -> Outcome {
        match self.books.iter().position(|book| book.isbn() == isbn) {
            Some(index) => {
                let book = self.books.remove(index);
                Outcome::book(Status::Removed, &book)
            }
            None => Outcome::NotFound,
        }
    }

    /// Render every book under a header row and separator line
    pub fn list_all(&self) -> String {
        let rows: String = self.books.iter().map(|book| format!("{}\n", book)).collect();
        format!("{}{}", Book::header(), rows)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
