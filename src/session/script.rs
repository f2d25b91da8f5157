//! One-shot sessions
//!
//! Runs a single command against a catalog file: load, execute, save.

use std::path::Path;

use crate::command::{Command, Outcome, Role};
use crate::config::Config;
use crate::error::Result;
use crate::model::isbn;
use crate::storage;

/// Role granted for a passcode attempt
///
/// A missing or wrong attempt runs as guest; librarian-only commands are
/// then refused by the catalog.
pub fn resolve_role(config: &Config, unlock: Option<&str>) -> Role {
    match unlock {
        Some(attempt) if config.passcode_matches(attempt) => Role::Librarian,
        Some(_) => {
            tracing::warn!("Passcode did not match; running as guest");
            Role::Guest
        }
        None => Role::Guest,
    }
}

/// Run one command against the catalog at `path`
///
/// The file is rewritten only when a mutating command found its book.
pub fn run_once(path: &Path, command: Command, role: Role) -> Result<Outcome> {
    if let Command::Add { isbn: ref value, .. } = command {
        isbn::validate(value)?;
    }

    let mut catalog = storage::load(path)?;
    let mutates = command.is_mutation();
    let outcome = catalog.execute(command, role)?;

    if mutates && !outcome.is_not_found() {
        storage::save(path, &catalog)?;
    }

    Ok(outcome)
}

/// Process exit code for a finished one-shot command
///
/// `3` when the isbn was not found, `0` otherwise.
pub fn exit_code(outcome: &Outcome) -> u8 {
    if outcome.is_not_found() {
        3
    } else {
        0
    }
}
