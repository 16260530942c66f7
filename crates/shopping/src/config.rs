//! Shopping behaviour settings.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the [`NegativeStockPolicy`] (`reject` | `allow`).
pub const NEGATIVE_STOCK_ENV: &str = "SHOPCART_NEGATIVE_STOCK";

/// Environment variable toggling cart clearing after a successful purchase (`true` | `false`).
pub const CLEAR_CART_ENV: &str = "SHOPCART_CLEAR_CART_ON_PURCHASE";

/// What `Cart::add` does with a product whose on-hand count is already negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeStockPolicy {
    /// Fail with "negative product quantity" before any other stock check.
    #[default]
    Reject,
    /// No dedicated check; the regular insufficient-quantity check applies.
    Allow,
}

impl FromStr for NegativeStockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            other => Err(format!("unknown negative stock policy: {other}")),
        }
    }
}

/// Settings for [`crate::ShoppingService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingConfig {
    /// Policy handed to every cart the service opens.
    pub negative_stock: NegativeStockPolicy,
    /// Empty the cart once a purchase has gone through.
    pub clear_cart_on_purchase: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            negative_stock: NegativeStockPolicy::Reject,
            clear_cart_on_purchase: true,
        }
    }
}

impl ShoppingConfig {
    /// Read settings from the process environment.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (environment, config map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let negative_stock = match lookup(NEGATIVE_STOCK_ENV) {
            Some(raw) => raw.parse::<NegativeStockPolicy>().unwrap_or_else(|err| {
                tracing::warn!(var = NEGATIVE_STOCK_ENV, %err, "ignoring invalid setting; using default");
                defaults.negative_stock
            }),
            None => defaults.negative_stock,
        };

        let clear_cart_on_purchase = match lookup(CLEAR_CART_ENV) {
            Some(raw) => raw.trim().parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(var = CLEAR_CART_ENV, value = %raw, "ignoring non-boolean setting; using default");
                defaults.clear_cart_on_purchase
            }),
            None => defaults.clear_cart_on_purchase,
        };

        Self {
            negative_stock,
            clear_cart_on_purchase,
        }
    }
}
