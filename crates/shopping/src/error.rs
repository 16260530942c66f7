use thiserror::Error;

use shopcart_core::DomainError;
use shopcart_inventory::InventoryError;
use shopcart_products::ProductId;

/// Why a purchase did not go through.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("not enough of product '{product_name}' in stock")]
    InsufficientStock {
        product_id: ProductId,
        product_name: String,
        requested: i64,
        available: i64,
    },

    /// The cart references a product the inventory no longer knows about.
    #[error("product {0} is not in the inventory")]
    UnknownProduct(ProductId),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
