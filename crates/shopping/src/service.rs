use tracing::{debug, info, instrument, warn};

use shopcart_customers::Customer;
use shopcart_inventory::{InventoryError, InventoryStore};
use shopcart_products::Product;

use crate::cart::Cart;
use crate::config::ShoppingConfig;
use crate::error::PurchaseError;

/// Validates carts against the inventory and executes purchases.
///
/// Holds no state besides the store and its settings; every read goes to the
/// store.
#[derive(Debug)]
pub struct ShoppingService<S> {
    store: S,
    config: ShoppingConfig,
}

impl<S: InventoryStore> ShoppingService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ShoppingConfig::default())
    }

    pub fn with_config(store: S, config: ShoppingConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ShoppingConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open a fresh cart for `customer`. Carts are not cached.
    pub fn get_cart(&self, customer: &Customer) -> Cart {
        Cart::with_policy(customer.clone(), self.config.negative_stock)
    }

    pub fn get_all_products(&self) -> Result<Vec<Product>, InventoryError> {
        self.store.find_all()
    }

    pub fn get_product_by_name(&self, name: &str) -> Result<Option<Product>, InventoryError> {
        self.store.find_by_name(name)
    }

    /// Buy everything in `cart`.
    ///
    /// Returns `Ok(false)` for an empty cart without touching the store.
    /// Otherwise every line is checked against the stored stock first; the
    /// first line that cannot be served aborts the purchase before anything is
    /// withdrawn or saved. Each product is then saved exactly once.
    #[instrument(
        name = "buy",
        skip_all,
        fields(customer_id = %cart.customer().id_typed(), lines = cart.len())
    )]
    pub fn buy(&self, cart: &mut Cart) -> Result<bool, PurchaseError> {
        if cart.is_empty() {
            debug!("cart is empty; nothing to buy");
            return Ok(false);
        }

        let mut picked = Vec::with_capacity(cart.len());
        for line in cart.lines() {
            let product = self
                .store
                .find_by_id(line.product_id)?
                .ok_or(PurchaseError::UnknownProduct(line.product_id))?;

            if !product.can_supply(line.quantity) {
                warn!(
                    product_id = %line.product_id,
                    product_name = product.name(),
                    requested = line.quantity,
                    available = product.count(),
                    "insufficient stock"
                );
                return Err(PurchaseError::InsufficientStock {
                    product_id: line.product_id,
                    product_name: product.name().to_string(),
                    requested: line.quantity,
                    available: product.count(),
                });
            }

            picked.push((product, line.quantity));
        }

        for (mut product, quantity) in picked {
            product.withdraw(quantity)?;
            debug!(product_id = %product.id_typed(), remaining = product.count(), "stock withdrawn");
            self.store.save(product)?;
        }

        info!(units = ?cart.total_quantity(), "purchase completed");

        if self.config.clear_cart_on_purchase {
            cart.clear();
        }
        Ok(true)
    }
}
