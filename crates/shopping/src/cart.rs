use chrono::{DateTime, Utc};

use shopcart_core::{DomainError, DomainResult};
use shopcart_customers::Customer;
use shopcart_products::{Product, ProductId};

use crate::config::NegativeStockPolicy;

/// One cart line: how many units of which product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Requested quantities per product for one customer's checkout.
///
/// The cart only holds product ids; current stock always comes from the
/// inventory store. Lines iterate in the order products were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    customer: Customer,
    lines: Vec<CartLine>,
    policy: NegativeStockPolicy,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Open an empty cart with the default stock policy.
    pub fn new(customer: Customer) -> Self {
        Self::with_policy(customer, NegativeStockPolicy::default())
    }

    pub fn with_policy(customer: Customer, policy: NegativeStockPolicy) -> Self {
        Self {
            customer,
            lines: Vec::new(),
            policy,
            created_at: Utc::now(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn policy(&self) -> NegativeStockPolicy {
        self.policy
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units requested for `product_id` (0 if it has no line).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Units requested across all lines, `None` if the sum overflows.
    ///
    /// Each line is bounded only by its own product's count, so lines of
    /// separate lots can add up past `i64::MAX`.
    pub fn total_quantity(&self) -> Option<i64> {
        self.lines
            .iter()
            .try_fold(0i64, |acc, line| acc.checked_add(line.quantity))
    }

    /// Request `quantity` more units of `product`.
    ///
    /// `product` is a snapshot used for validation only; its count is not
    /// touched. Requests for a product already in the cart accumulate, and the
    /// accumulated total is what gets checked against the count. On error the
    /// cart is unchanged.
    pub fn add(&mut self, product: &Product, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }

        if self.policy == NegativeStockPolicy::Reject && product.count() < 0 {
            return Err(DomainError::invalid_argument("negative product quantity"));
        }

        let product_id = product.id_typed();
        let total = self
            .quantity_of(product_id)
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invalid_argument("requested quantity overflow"))?;

        if !product.can_supply(total) {
            return Err(DomainError::invalid_argument(format!(
                "cannot add product '{}' to cart: insufficient quantity available",
                product.name()
            )));
        }

        match self.lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => line.quantity = total,
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }
        Ok(())
    }

    /// Drop the line for `product_id`, returning the quantity it held.
    pub fn remove(&mut self, product_id: ProductId) -> Option<i64> {
        let idx = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)?;
        Some(self.lines.remove(idx).quantity)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
