use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, Entity, EntityId};

/// Product identifier. Distinguishes lots that happen to share a name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Allocate a fresh identifier.
    pub fn generate() -> Self {
        Self(EntityId::new())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A named inventory item with a mutable on-hand count.
///
/// The count is signed: stock records imported from elsewhere can already be
/// negative, and construction accepts them as-is. Whether such a product may
/// be put in a cart is decided by the cart's stock policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    count: i64,
}

impl Product {
    /// Create a new product lot with a freshly generated id.
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self::with_id(ProductId::generate(), name, count)
    }

    pub fn with_id(id: ProductId, name: impl Into<String>, count: i64) -> Self {
        Self {
            id,
            name: name.into(),
            count,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units on hand.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether `quantity` units could be taken from this lot right now.
    pub fn can_supply(&self, quantity: i64) -> bool {
        quantity <= self.count
    }

    /// Take `quantity` units out of stock.
    ///
    /// Never lets the count drop below zero through a withdrawal.
    pub fn withdraw(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invariant("withdrawal quantity must be positive"));
        }
        if !self.can_supply(quantity) {
            return Err(DomainError::invariant(format!(
                "cannot withdraw {quantity} of product '{}': only {} on hand",
                self.name, self.count
            )));
        }
        self.count -= quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_negative_count() {
        let product = Product::new("name1", -3);
        assert_eq!(product.count(), -3);
        assert_eq!(product.name(), "name1");
    }

    #[test]
    fn withdraw_decrements_count() {
        let mut product = Product::new("name1", 2);
        product.withdraw(2).unwrap();
        assert_eq!(product.count(), 0);
    }

    #[test]
    fn withdraw_more_than_on_hand_leaves_count_untouched() {
        let mut product = Product::new("name2", 1);
        let err = product.withdraw(2).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("name2")),
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
        assert_eq!(product.count(), 1);
    }

    #[test]
    fn withdraw_rejects_non_positive_quantity() {
        let mut product = Product::new("name1", 5);
        assert!(product.withdraw(0).is_err());
        assert!(product.withdraw(-1).is_err());
        assert_eq!(product.count(), 5);
    }

    #[test]
    fn lots_with_the_same_name_are_distinct_entities() {
        let a = Product::new("apple", 3);
        let b = Product::new("apple", 3);
        assert!(!a.same_identity(&b));
        assert_ne!(a, b);

        let mut a_later = a.clone();
        a_later.withdraw(1).unwrap();
        assert!(a.same_identity(&a_later));
    }

    #[test]
    fn serializes_with_transparent_id() {
        let product = Product::new("name1", 2);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "name1");
        assert_eq!(json["count"], 2);
        assert_eq!(json["id"], product.id_typed().to_string());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a successful withdrawal lowers the count by exactly the quantity,
            /// a failed one changes nothing.
            #[test]
            fn withdraw_is_exact_or_a_no_op(count in -50i64..50, quantity in -5i64..60) {
                let mut product = Product::new("lot", count);
                match product.withdraw(quantity) {
                    Ok(()) => {
                        prop_assert!(quantity > 0 && quantity <= count);
                        prop_assert_eq!(product.count(), count - quantity);
                    }
                    Err(_) => prop_assert_eq!(product.count(), count),
                }
                prop_assert!(product.count() >= count.min(0));
            }
        }
    }
}
