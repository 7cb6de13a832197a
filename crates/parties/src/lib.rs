//! Parties domain module (customers).

pub mod customer;

pub use customer::{Customer, DEFAULT_CUSTOMER_NAME};
