//! Session Module
//!
//! The interactive, role-gated menu loop around a catalog.
//!
//! ## Responsibilities
//! - Ask for a catalog file until one loads
//! - Show the guest or librarian menu and read selections
//! - Unlock the librarian role when the configured passcode is entered
//! - Save the catalog back to its file on exit
//! - Run single scripted commands against a catalog file ([`script`])
//!
//! ## Flow
//! ```text
//!   load ──▶ menu ──▶ selection ──▶ command ──▶ outcome
//!             ▲                                    │
//!             └────────────────────────────────────┘
//!   exit / end of input ──▶ save ──▶ done
//! ```

mod menu;
pub mod script;
mod shell;

pub use menu::Selection;
pub use shell::{SessionEnd, Shell};
