use std::sync::RwLock;

use shopcart_core::Entity;
use shopcart_products::{Product, ProductId};

use crate::store::{InventoryError, InventoryStore};

/// In-memory product store.
///
/// Intended for tests/dev. Lookups are linear scans; insertion order is kept
/// so `find_all` and `find_by_name` are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `products` (later duplicates of an id
    /// replace earlier ones).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, InventoryError> {
        let store = Self::new();
        for product in products {
            store.save(product)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> Result<usize, InventoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(products.len())
    }

    pub fn is_empty(&self) -> Result<bool, InventoryError> {
        Ok(self.len()? == 0)
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn save(&self, product: Product) -> Result<(), InventoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;

        match products.iter_mut().find(|p| p.same_identity(&product)) {
            Some(existing) => {
                tracing::debug!(product_id = %product.id(), count = product.count(), "product updated");
                *existing = product;
            }
            None => {
                tracing::debug!(product_id = %product.id(), count = product.count(), "product inserted");
                products.push(product);
            }
        }
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Product>, InventoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(products.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, InventoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(products.iter().find(|p| p.name() == name).cloned())
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, InventoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(products.iter().find(|p| p.id_typed() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn save_inserts_then_replaces_by_id() {
        let store = InMemoryInventoryStore::new();
        let mut product = Product::new("name1", 2);
        store.save(product.clone()).unwrap();

        product.withdraw(1).unwrap();
        store.save(product.clone()).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        let stored = store.find_by_id(product.id_typed()).unwrap().unwrap();
        assert_eq!(stored.count(), 1);
    }

    #[test]
    fn find_all_keeps_first_save_order() {
        let a = Product::new("a", 1);
        let b = Product::new("b", 2);
        let c = Product::new("c", 3);
        let store =
            InMemoryInventoryStore::with_products([a.clone(), b.clone(), c.clone()]).unwrap();

        // Re-saving `a` must not move it to the back.
        store.save(a.clone()).unwrap();

        let names: Vec<_> = store
            .find_all()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn find_by_name_returns_first_lot_with_that_name() {
        let first = Product::new("apple", 1);
        let second = Product::new("apple", 9);
        let store = InMemoryInventoryStore::with_products([first.clone(), second]).unwrap();

        let found = store.find_by_name("apple").unwrap().unwrap();
        assert_eq!(found.id_typed(), first.id_typed());
        assert!(store.find_by_name("pear").unwrap().is_none());
    }

    #[test]
    fn find_by_id_misses_unknown_products() {
        let store = InMemoryInventoryStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.find_by_id(ProductId::generate()).unwrap().is_none());
    }

    #[test]
    fn shared_store_sees_writes_through_arc() {
        let store = Arc::new(InMemoryInventoryStore::new());
        let writer: Arc<InMemoryInventoryStore> = Arc::clone(&store);
        let product = Product::new("shared", 4);

        InventoryStore::save(&writer, product.clone()).unwrap();

        let seen = InventoryStore::find_by_id(&store, product.id_typed()).unwrap();
        assert_eq!(seen, Some(product));
    }
}
