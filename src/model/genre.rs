//! Genre enumeration
//!
//! The genre list is fixed and ordered; records store an index into it.

use std::fmt;

use crate::error::{CatalogError, Result};

/// Display names of every genre, in index order
pub const GENRES: [&str; 10] = [
    "Romance",
    "Mystery",
    "Science Fiction",
    "Thriller",
    "Young Adult",
    "Children’s Fiction",
    "Self-help",
    "Fantasy",
    "Historical Fiction",
    "Poetry",
];

/// A validated index into [`GENRES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genre(usize);

impl Genre {
    /// Number of known genres
    pub const COUNT: usize = GENRES.len();

    /// Look up a genre by its position in the list
    pub fn from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(CatalogError::InvalidGenre(index))
        }
    }

    /// Look up a genre by display name (exact, case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        GENRES.iter().position(|g| *g == name).map(Self)
    }

    /// Iterate over every genre in index order
    pub fn all() -> impl Iterator<Item = Genre> {
        (0..Self::COUNT).map(Self)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        GENRES[self.0]
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
