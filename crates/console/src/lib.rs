//! `tillbook-console` — the interactive front desk.
//!
//! A thin collaborator over the domain crates: the [`Desk`] service wires the
//! record stores to invoices, and the [`Menu`] drives it from a text console.

pub mod cli;
pub mod desk;
pub mod menu;

pub use cli::Cli;
pub use desk::{Desk, DeskError, Registration};
pub use menu::Menu;
