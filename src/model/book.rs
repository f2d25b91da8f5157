//! Book record
//!
//! A single catalog entry and its availability state.

use std::fmt;

use crate::error::Result;
use super::Genre;

/// Column widths used when rendering a book as a listing row
pub const ISBN_WIDTH: usize = 14;
pub const TITLE_WIDTH: usize = 25;
pub const AUTHOR_WIDTH: usize = 25;
pub const GENRE_WIDTH: usize = 20;

/// A book in the catalog
///
/// ## Availability
/// Two states, `Available` and `Borrowed`. [`Book::borrow`] and
/// [`Book::return_item`] flip the flag without checking the current state;
/// the catalog checks before calling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    genre: Genre,
    available: bool,
}

impl Book {
    /// Create a new book
    ///
    /// Fails with `InvalidGenre` if `genre_index` is not a position in the genre list.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre_index: usize,
        available: bool,
    ) -> Result<Self> {
        Ok(Self::with_genre(
            isbn,
            title,
            author,
            Genre::from_index(genre_index)?,
            available,
        ))
    }

    /// Create a new book from an already validated genre
    pub fn with_genre(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        available: bool,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre,
            available,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Display name of this book's genre
    pub fn genre_name(&self) -> &'static str {
        self.genre.name()
    }

    /// `"Available"` or `"Borrowed"`
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.isbn = isbn.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Change the genre; an out-of-range index leaves the book untouched
    pub fn set_genre(&mut self, genre_index: usize) -> Result<()> {
        self.genre = Genre::from_index(genre_index)?;
        Ok(())
    }

    /// Mark as borrowed
    pub fn borrow(&mut self) {
        self.available = false;
    }

    /// Mark as available again
    pub fn return_item(&mut self) {
        self.available = true;
    }

    /// Listing header and separator line matching the `Display` column layout
    pub fn header() -> String {
        let header = format!(
            "{:<iw$} {:<tw$} {:<aw$} {:<gw$} {}",
            "ISBN",
            "Title",
            "Author",
            "Genre",
            "Availability",
            iw = ISBN_WIDTH,
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            gw = GENRE_WIDTH,
        );
        let separator = "-".repeat(header.chars().count());
        format!("{}\n{}\n", header, separator)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<iw$} {:<tw$} {:<aw$} {:<gw$} {}",
            self.isbn,
            self.title,
            self.author,
            self.genre_name(),
            self.availability_label(),
            iw = ISBN_WIDTH,
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            gw = GENRE_WIDTH,
        )
    }
}
