//! Tests for catalog storage
//!
//! These tests verify:
//! - Loading well-formed files (flag casing, quoting, blank lines)
//! - Missing file and malformed row failures
//! - Save/load round-trips preserve order and fields
//! - Save overwrites the destination

use std::fs;
use std::path::PathBuf;

use bookshelf::storage::{self, CatalogReader, CatalogWriter};
use bookshelf::{Book, Catalog, CatalogError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const WELL_FORMED: &str = "\
111-1111111111,Dune,Herbert,7,True
222-2222222222,Gone Girl,Gillian Flynn,3,False
333-3333333333,\"Crime, and Punishment\",Dostoevsky,1,True
";

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_well_formed_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", WELL_FORMED);

    let catalog = storage::load(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    let books = catalog.books();
    assert_eq!(books[0].title(), "Dune");
    assert_eq!(books[0].genre_name(), "Fantasy");
    assert!(books[0].is_available());
    assert_eq!(books[1].author(), "Gillian Flynn");
    assert!(!books[1].is_available());
    assert_eq!(books[2].title(), "Crime, and Punishment");
}

#[test]
fn test_load_flag_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "books.csv",
        "1,A,X,0,true\n2,B,X,0,TRUE\n3,C,X,0, True\n4,D,X,0,yes\n5,E,X,0,false\n",
    );

    let catalog = storage::load(&path).unwrap();
    let flags: Vec<bool> = catalog.iter().map(Book::is_available).collect();

    assert_eq!(flags, vec![true, true, true, false, false]);
}

#[test]
fn test_load_empty_file_gives_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "empty.csv", "");

    let catalog = storage::load(&path).unwrap();

    assert!(catalog.is_empty());
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.csv");

    let result = storage::load(&path);

    assert!(matches!(result, Err(CatalogError::SourceNotFound(ref p)) if *p == path));
}

#[test]
fn test_load_wrong_field_count_fails_whole_load() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "books.csv",
        "111-1111111111,Dune,Herbert,7,True\n222-2222222222,Gone Girl,3,False\n",
    );

    let result = storage::load(&path);

    assert!(matches!(result, Err(CatalogError::MalformedRow { line: 2, .. })));
}

#[test]
fn test_load_non_integer_genre_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", "111-1111111111,Dune,Herbert,Fantasy,True\n");

    let result = storage::load(&path);

    match result {
        Err(CatalogError::MalformedRow { line, reason }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("Fantasy"));
        }
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_load_out_of_range_genre_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", "111-1111111111,Dune,Herbert,12,True\n");

    let result = storage::load(&path);

    assert!(matches!(result, Err(CatalogError::MalformedRow { line: 1, .. })));
}

#[test]
fn test_reader_over_in_memory_source() {
    let catalog = CatalogReader::new(WELL_FORMED.as_bytes())
        .read_catalog()
        .unwrap();

    assert_eq!(catalog.len(), 3);
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_writes_canonical_flags() {
    let catalog = Catalog::from_books(vec![
        Book::new("111-1111111111", "Dune", "Herbert", 7, true).unwrap(),
        Book::new("222-2222222222", "Emma", "Austen", 0, false).unwrap(),
    ]);

    let mut out = Vec::new();
    CatalogWriter::new(&mut out).write_catalog(&catalog).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "111-1111111111,Dune,Herbert,7,True\n222-2222222222,Emma,Austen,0,False\n"
    );
}

#[test]
fn test_save_overwrites_destination() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", WELL_FORMED);

    let catalog = Catalog::from_books(vec![
        Book::new("999-9999999999", "Only", "One", 9, true).unwrap(),
    ]);
    storage::save(&path, &catalog).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "999-9999999999,Only,One,9,True\n"
    );
}

#[test]
fn test_save_creates_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("new.csv");

    storage::save(&path, &Catalog::new()).unwrap();

    assert!(path.exists());
    assert!(storage::load(&path).unwrap().is_empty());
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_is_byte_identical_for_canonical_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", WELL_FORMED);

    let catalog = storage::load(&path).unwrap();
    storage::save(&path, &catalog).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), WELL_FORMED);
}

#[test]
fn test_round_trip_canonicalises_flag_casing() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", "111-1111111111,Dune,Herbert,7,true\n");

    let catalog = storage::load(&path).unwrap();
    storage::save(&path, &catalog).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "111-1111111111,Dune,Herbert,7,True\n"
    );
}

#[test]
fn test_round_trip_after_mutations() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "books.csv", WELL_FORMED);

    let mut catalog = storage::load(&path).unwrap();
    catalog.borrow("111-1111111111");
    catalog.remove("222-2222222222");
    catalog
        .add("444-4444444444", "Leaves of Grass", "Whitman", "Poetry")
        .unwrap();
    storage::save(&path, &catalog).unwrap();

    let reloaded = storage::load(&path).unwrap();
    assert_eq!(reloaded, catalog);
    assert_eq!(reloaded.books()[2].title(), "Leaves of Grass");
}
