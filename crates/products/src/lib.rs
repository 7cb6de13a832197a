//! Products domain module.
//!
//! This crate contains the product catalog's pricing rules, implemented purely
//! as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{
    Category, DEFAULT_PRODUCT_NAME, Product, ProductKind, UnknownCategory, CLOTHING_SURCHARGE,
    GROCERIES_PRICE_FACTOR, WARRANTY_RATE,
};
