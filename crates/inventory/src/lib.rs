//! Inventory persistence boundary.
//!
//! Defines the storage-facing abstraction the shopping service reads products
//! from and writes them back to, plus an in-memory implementation for tests
//! and development. No storage engine assumptions are made here.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryInventoryStore;
pub use store::{InventoryError, InventoryStore};
