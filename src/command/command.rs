//! Command definitions
//!
//! Represents the operations a session can run against the catalog.

use super::Role;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Search,
    Borrow,
    Return,
    Add,
    Remove,
    List,
}

impl CommandType {
    /// Lowest role allowed to run this command
    pub fn required_role(self) -> Role {
        match self {
            CommandType::Search | CommandType::Borrow | CommandType::Return => Role::Guest,
            CommandType::Add | CommandType::Remove | CommandType::List => Role::Librarian,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandType::Search => "search",
            CommandType::Borrow => "borrow",
            CommandType::Return => "return",
            CommandType::Add => "add",
            CommandType::Remove => "remove",
            CommandType::List => "list",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Case-insensitive search over title, author, genre and isbn
    Search { query: String },

    /// Borrow the first book with this isbn
    Borrow { isbn: String },

    /// Return the first book with this isbn
    Return { isbn: String },

    /// Append a new, available book
    Add {
        isbn: String,
        title: String,
        author: String,
        genre: String,
    },

    /// Remove the first book with this isbn
    Remove { isbn: String },

    /// Render the whole catalog
    List,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Search { .. } => CommandType::Search,
            Command::Borrow { .. } => CommandType::Borrow,
            Command::Return { .. } => CommandType::Return,
            Command::Add { .. } => CommandType::Add,
            Command::Remove { .. } => CommandType::Remove,
            Command::List => CommandType::List,
        }
    }

    /// Whether running this command can change the catalog
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::Search { .. } | Command::List)
    }
}
