//! Catalog writer
//!
//! Serializes books back to CSV rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::Book;

/// One CSV row, in file column order
#[derive(Debug, Serialize)]
struct Row<'a> {
    isbn: &'a str,
    title: &'a str,
    author: &'a str,
    genre: usize,
    available: &'static str,
}

impl<'a> From<&'a Book> for Row<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            isbn: book.isbn(),
            title: book.title(),
            author: book.author(),
            genre: book.genre().index(),
            available: if book.is_available() { "True" } else { "False" },
        }
    }
}

/// Writes a catalog as CSV rows
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CatalogWriter<File> {
    /// Create (or truncate) a catalog file
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> CatalogWriter<W> {
    /// Wrap any byte sink
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new().has_headers(false).from_writer(sink);
        Self { writer }
    }

    /// Write every book in catalog order and flush
    pub fn write_catalog(mut self, catalog: &Catalog) -> Result<()> {
        for book in catalog {
            self.writer.serialize(Row::from(book))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
