//! Invoicing domain module.
//!
//! An invoice binds one customer to an ordered list of products and prices
//! them on demand. Invoices are never persisted.

pub mod invoice;

pub use invoice::Invoice;
