//! ISBN format check
//!
//! Only the shape is checked: 13 digits, optionally split by dashes
//! (the prompt format is `999-9999999999`). No checksum validation.

use crate::error::{CatalogError, Result};

/// Number of digits in an ISBN-13
pub const ISBN_DIGITS: usize = 13;

/// Validate the format of an ISBN typed at a prompt
pub fn validate(isbn: &str) -> Result<()> {
    let mut digits = 0;
    for c in isbn.chars() {
        match c {
            '0'..='9' => digits += 1,
            '-' => {}
            _ => return Err(CatalogError::InvalidIsbn(isbn.to_string())),
        }
    }

    if digits != ISBN_DIGITS || isbn.starts_with('-') || isbn.ends_with('-') {
        return Err(CatalogError::InvalidIsbn(isbn.to_string()));
    }

    Ok(())
}
