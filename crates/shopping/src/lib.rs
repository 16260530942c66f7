//! Shopping cart and purchase workflow.
//!
//! A [`Cart`] collects requested quantities per product for one customer;
//! [`ShoppingService::buy`] validates the cart against the inventory store and
//! withdraws the stock. Both the negative-stock check at cart time and the
//! post-purchase cart clearing are explicit settings in [`ShoppingConfig`].

pub mod cart;
pub mod config;
pub mod error;
pub mod service;

pub use cart::{Cart, CartLine};
pub use config::{NegativeStockPolicy, ShoppingConfig};
pub use error::PurchaseError;
pub use service::ShoppingService;
