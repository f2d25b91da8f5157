//! Catalog reader
//!
//! Parses the CSV catalog file into books.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::model::Book;

use super::FIELD_COUNT;

/// Reads a catalog from CSV rows
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl CatalogReader<File> {
    /// Open a catalog file
    ///
    /// A missing file is reported as `SourceNotFound` so callers can ask
    /// for another name.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::SourceNotFound(path.to_path_buf()),
            _ => CatalogError::Io(e),
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> CatalogReader<R> {
    /// Wrap any byte source holding catalog rows
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Read every row
    ///
    /// The first malformed row fails the whole load.
    pub fn read_catalog(mut self) -> Result<Catalog> {
        let mut books = Vec::new();
        let mut record = StringRecord::new();

        while self.reader.read_record(&mut record)? {
            books.push(parse_row(&record)?);
        }

        Ok(Catalog::from_books(books))
    }
}

/// Parse one `isbn,title,author,genre_index,available_flag` row
fn parse_row(record: &StringRecord) -> Result<Book> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let malformed = |reason: String| CatalogError::MalformedRow { line, reason };

    if record.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let genre_field = record[3].trim();
    let genre: usize = genre_field
        .parse()
        .map_err(|_| malformed(format!("genre index '{}' is not an integer", genre_field)))?;

    let available = record[4].trim().eq_ignore_ascii_case("true");

    Book::new(&record[0], &record[1], &record[2], genre, available)
        .map_err(|e| malformed(e.to_string()))
}
