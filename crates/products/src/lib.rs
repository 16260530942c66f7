//! Products domain module.
//!
//! A product is a named lot of stock with a mutable on-hand count. Identity is
//! the `ProductId`; names are display data and may repeat across lots.

pub mod product;

pub use product::{Product, ProductId};
