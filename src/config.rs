//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::command::Role;
use crate::error::{CatalogError, Result};
use crate::session::Selection;

/// Main configuration for a Bookshelf session
#[derive(Debug, Clone, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Catalog file to load at startup and save on exit.
    /// When unset, the interactive session asks for it.
    pub catalog_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Shared secret that unlocks the librarian menu.
    /// `None` disables elevation entirely.
    pub passcode: Option<String>,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether `attempt` matches the configured passcode
    pub fn passcode_matches(&self, attempt: &str) -> bool {
        match &self.passcode {
            Some(secret) => secret == attempt,
            None => false,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = Some(path.into());
        self
    }

    /// Set the librarian passcode
    pub fn passcode(mut self, passcode: impl Into<String>) -> Self {
        self.config.passcode = Some(passcode.into());
        self
    }

    /// Build the config, rejecting passcodes the menu prompt cannot tell apart
    ///
    /// The passcode is typed at the selection prompt, so it must be neither
    /// blank nor a menu choice.
    pub fn build(self) -> Result<Config> {
        if let Some(passcode) = &self.config.passcode {
            if passcode.trim().is_empty() {
                return Err(CatalogError::Config(
                    "passcode must not be blank".to_string(),
                ));
            }
            if Selection::parse(passcode, Role::Librarian).is_some() {
                return Err(CatalogError::Config(format!(
                    "passcode '{}' collides with a menu selection",
                    passcode
                )));
            }
        }
        Ok(self.config)
    }
}
