//! Storage Module
//!
//! Persists the catalog as a flat CSV file.
//!
//! ## Responsibilities
//! - Load the whole catalog once at session start
//! - Overwrite the whole file once at session end
//!
//! ## File Format
//! ```text
//! 111-1111111111,Dune,Herbert,7,True
//! 222-2222222222,"Crime, and Punishment",Dostoevsky,1,False
//! ```
//! - No header row; columns are `isbn,title,author,genre_index,available_flag`
//! - `genre_index` is a base-10 position in the genre list
//! - `available_flag` is read case-insensitively, written as `True`/`False`
//! - Fields containing a comma or quote use standard CSV quoting

mod reader;
mod writer;

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;

pub use reader::CatalogReader;
pub use writer::CatalogWriter;

/// Number of fields in every row
pub const FIELD_COUNT: usize = 5;

/// Load a catalog file
///
/// Fails with `SourceNotFound` if the file is missing and `MalformedRow`
/// at the first row with the wrong shape.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog = CatalogReader::open(path)?.read_catalog()?;
    tracing::debug!("Loaded {} books from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Overwrite a catalog file with the current contents
pub fn save(path: impl AsRef<Path>, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    CatalogWriter::create(path)?.write_catalog(catalog)?;
    tracing::debug!("Saved {} books to {}", catalog.len(), path.display());
    Ok(())
}
