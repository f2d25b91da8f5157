//! Session roles

use std::fmt;

/// Capability level of a session
///
/// Ordered so that `Librarian > Guest`; a command is allowed when the
/// session role is at least the command's required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Role {
    #[default]
    Guest,
    Librarian,
}

impl Role {
    /// Whether this role may run something that requires `required`
    pub fn allows(self, required: Role) -> bool {
        self >= required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => f.write_str("guest"),
            Role::Librarian => f.write_str("librarian"),
        }
    }
}
