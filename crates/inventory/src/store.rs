use std::sync::Arc;

use thiserror::Error;

use shopcart_products::{Product, ProductId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory store lock poisoned")]
    LockPoisoned,

    #[error("inventory store unavailable: {0}")]
    Unavailable(String),
}

/// Product inventory store.
///
/// The store is the single source of truth for product state. Callers hold
/// `ProductId`s and re-read through the store instead of keeping long-lived
/// product references.
///
/// Methods take `&self`; implementations use interior mutability so a store
/// can be shared (e.g. behind an `Arc`).
pub trait InventoryStore: Send + Sync {
    /// Insert or replace the product with the same id.
    fn save(&self, product: Product) -> Result<(), InventoryError>;

    /// All products, in the order they were first saved.
    fn find_all(&self) -> Result<Vec<Product>, InventoryError>;

    /// First product (in first-save order) carrying `name`.
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, InventoryError>;

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, InventoryError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn save(&self, product: Product) -> Result<(), InventoryError> {
        (**self).save(product)
    }

    fn find_all(&self) -> Result<Vec<Product>, InventoryError> {
        (**self).find_all()
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, InventoryError> {
        (**self).find_by_name(name)
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, InventoryError> {
        (**self).find_by_id(id)
    }
}
