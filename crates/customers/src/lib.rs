//! Customers domain module.
//!
//! Customer identity management lives elsewhere; this crate only carries the
//! identity a cart is opened for.

pub mod customer;

pub use customer::{Customer, CustomerId};
