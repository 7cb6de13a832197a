//! `tillbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no file handling).

pub mod entity;
pub mod error;
pub mod name;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use name::validate_record_field;
