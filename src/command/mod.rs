//! Command Module
//!
//! Typed requests a session sends to the catalog, the role each one
//! needs, and the outcome it produces.
//!
//! ### Commands
//! | Command | Role      | Mutates |
//! |---------|-----------|---------|
//! | Search  | Guest     | no      |
//! | Borrow  | Guest     | yes     |
//! | Return  | Guest     | yes     |
//! | Add     | Librarian | yes     |
//! | Remove  | Librarian | yes     |
//! | List    | Librarian | no      |

#[allow(clippy::module_inception)]
mod command;
mod outcome;
mod role;

pub use command::{Command, CommandType};
pub use outcome::{Outcome, Status};
pub use role::Role;
