//! Interactive shell
//!
//! Drives one catalog session over a line-oriented input and output.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::command::{Command, Role};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::model::{isbn, Genre, GENRES};
use crate::storage;

use super::menu::{self, Selection};

const ISBN_PROMPT: &str = "Enter the 13-digit ISBN (format 999-9999999999): ";

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The catalog was saved back to this path
    Saved(PathBuf),

    /// Input ran out before any catalog was loaded; nothing was saved
    NoCatalog,
}

/// Whether the menu loop keeps going
enum Flow {
    Continue,
    Exit,
}

/// A single interactive session
///
/// Generic over its input and output so it can run against a terminal
/// or an in-memory script.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    role: Role,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell; nothing is loaded until [`Shell::run`]
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            role: Role::Guest,
            catalog: Catalog::new(),
        }
    }

    /// Run the session until the user exits or input ends
    ///
    /// Loads the catalog (asking again until a usable file is given), runs
    /// the menu loop, then saves the catalog back to the file it came from.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let Some(path) = self.open_catalog()? else {
            tracing::info!("Input closed before a catalog was loaded");
            return Ok(SessionEnd::NoCatalog);
        };

        writeln!(self.output, "Book catalog has been loaded.")?;

        loop {
            menu::display(&mut self.output, self.role)?;
            let Some(choice) = self.prompt("Enter your selection: ")? else {
                break;
            };

            match self.dispatch(&choice)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }

        writeln!(self.output, "-- Exit the system --")?;
        storage::save(&path, &self.catalog)?;
        writeln!(self.output, "Book catalog has been saved.")?;
        writeln!(self.output, "Good Bye!")?;
        self.output.flush()?;

        Ok(SessionEnd::Saved(path))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Load the configured catalog, or ask until one loads with at least one book
    fn open_catalog(&mut self) -> Result<Option<PathBuf>> {
        let mut candidate = match self.config.catalog_path.clone() {
            Some(path) => path,
            None => match self.prompt("Enter book catalog filename: ")? {
                Some(name) => PathBuf::from(name),
                None => return Ok(None),
            },
        };

        loop {
            if self.try_load(&candidate)? {
                return Ok(Some(candidate));
            }

            candidate = match self.prompt("Re-enter book catalog filename: ")? {
                Some(name) => PathBuf::from(name),
                None => return Ok(None),
            };
        }
    }

    /// Try one catalog file, reporting why it cannot be used
    fn try_load(&mut self, path: &Path) -> Result<bool> {
        match storage::load(path) {
            Ok(catalog) if catalog.is_empty() => {
                tracing::debug!("Catalog {} has no books", path.display());
                writeln!(self.output, "Catalog file is empty.")?;
                Ok(false)
            }
            Ok(catalog) => {
                self.catalog = catalog;
                Ok(true)
            }
            Err(CatalogError::SourceNotFound(_)) => {
                tracing::debug!("Catalog {} not found", path.display());
                writeln!(self.output, "File not found.")?;
                Ok(false)
            }
            Err(
                e @ (CatalogError::MalformedRow { .. } | CatalogError::Csv(_) | CatalogError::Io(_)),
            ) => {
                tracing::debug!("Catalog {} could not be parsed: {}", path.display(), e);
                writeln!(self.output, "Could not load catalog: {}", e)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Menu Handling
    // =========================================================================

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        let Some(selection) = Selection::parse(choice, self.role) else {
            if self.role == Role::Guest && self.config.passcode_matches(choice) {
                self.role = Role::Librarian;
                tracing::info!("Librarian role unlocked");
                writeln!(self.output, "Librarian menu unlocked.")?;
            } else {
                writeln!(self.output, "Invalid option")?;
            }
            return Ok(Flow::Continue);
        };

        match selection {
            Selection::Search => {
                let Some(query) = self.prompt("-- Search for books --\nEnter search value: ")?
                else {
                    return Ok(Flow::Exit);
                };
                self.run_command(Command::Search { query })?;
            }
            Selection::Borrow => {
                let Some(isbn) = self.prompt_isbn("-- Borrow a book --")? else {
                    return Ok(Flow::Exit);
                };
                self.run_command(Command::Borrow { isbn })?;
            }
            Selection::Return => {
                let Some(isbn) = self.prompt_isbn("-- Return a book --")? else {
                    return Ok(Flow::Exit);
                };
                self.run_command(Command::Return { isbn })?;
            }
            Selection::Add => return self.add_book(),
            Selection::Remove => {
                let Some(isbn) = self.prompt_isbn("-- Remove a book --")? else {
                    return Ok(Flow::Exit);
                };
                self.run_command(Command::Remove { isbn })?;
            }
            Selection::Print => self.run_command(Command::List)?,
            Selection::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Collect a new book field by field, re-asking for a bad ISBN or genre
    fn add_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "-- Add a book --")?;

        let isbn = loop {
            let Some(isbn) = self.prompt(ISBN_PROMPT)? else {
                return Ok(Flow::Exit);
            };
            match isbn::validate(&isbn) {
                Ok(()) => break isbn,
                Err(e) => {
                    tracing::debug!("Rejected ISBN input: {}", e);
                    writeln!(self.output, "Invalid ISBN. Use the format 999-9999999999.")?;
                }
            }
        };

        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter author name: ")? else {
            return Ok(Flow::Exit);
        };

        let genre = loop {
            let Some(genre) = self.prompt("Enter genre: ")? else {
                return Ok(Flow::Exit);
            };
            if Genre::from_name(&genre).is_some() {
                break genre;
            }
            tracing::debug!("Rejected genre input: {}", genre);
            writeln!(
                self.output,
                "Invalid genre. Choices are: {}",
                GENRES.join(", ")
            )?;
        };

        self.run_command(Command::Add {
            isbn,
            title,
            author,
            genre,
        })?;

        Ok(Flow::Continue)
    }

    /// Run a command and print its outcome
    ///
    /// Rejections the user can act on are printed; anything else propagates.
    fn run_command(&mut self, command: Command) -> Result<()> {
        match self.catalog.execute(command, self.role) {
            Ok(outcome) => writeln!(self.output, "{}", outcome)?,
            Err(
                e @ (CatalogError::PermissionDenied(_)
                | CatalogError::UnknownGenre(_)
                | CatalogError::InvalidIsbn(_)),
            ) => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn prompt_isbn(&mut self, heading: &str) -> Result<Option<String>> {
        self.prompt(&format!("{}\n{}", heading, ISBN_PROMPT))
    }

    /// Print `text` and read one line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}
