//! Menu text and selection parsing

use std::io::{self, Write};

use crate::command::Role;

/// A menu entry picked at the selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Search,
    Borrow,
    Return,
    Add,
    Remove,
    Print,
    Exit,
}

impl Selection {
    /// Map a typed choice to a menu entry visible to `role`
    pub fn parse(choice: &str, role: Role) -> Option<Self> {
        let selection = match choice {
            "1" => Selection::Search,
            "2" => Selection::Borrow,
            "3" => Selection::Return,
            "4" => Selection::Add,
            "5" => Selection::Remove,
            "6" => Selection::Print,
            "0" => Selection::Exit,
            _ => return None,
        };

        if role.allows(selection.required_role()) {
            Some(selection)
        } else {
            None
        }
    }

    fn required_role(self) -> Role {
        match self {
            Selection::Add | Selection::Remove | Selection::Print => Role::Librarian,
            _ => Role::Guest,
        }
    }
}

/// Print the menu for `role`
pub fn display(out: &mut impl Write, role: Role) -> io::Result<()> {
    let title = match role {
        Role::Guest => "Reader's Guild Library - Main Menu",
        Role::Librarian => "Reader's Guild Library - Librarian Menu",
    };

    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out, "1. Search for books")?;
    writeln!(out, "2. Borrow a book")?;
    writeln!(out, "3. Return a book")?;
    if role == Role::Librarian {
        writeln!(out, "4. Add a book")?;
        writeln!(out, "5. Remove a book")?;
        writeln!(out, "6. Print catalog")?;
    }
    writeln!(out, "0. Exit the system")
}
