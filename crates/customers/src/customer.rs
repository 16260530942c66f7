use serde::{Deserialize, Serialize};

use shopcart_core::Entity;

/// Customer identifier, as issued by the customer registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The customer a cart belongs to. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    contact: String,
}

impl Customer {
    pub fn new(id: u64, contact: impl Into<String>) -> Self {
        Self {
            id: CustomerId(id),
            contact: contact.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    /// Free-form contact string (phone number, email, ...).
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_keeps_id_and_contact() {
        let customer = Customer::new(1, "11-11-11");
        assert_eq!(customer.id_typed(), CustomerId::new(1));
        assert_eq!(customer.contact(), "11-11-11");
        assert_eq!(customer.id_typed().get(), 1);
        assert_eq!(customer.id().to_string(), "1");
        assert_eq!(CustomerId::from(1u64), customer.id_typed());
    }

    #[test]
    fn identity_ignores_contact() {
        let a = Customer::new(7, "a@example.com");
        let b = Customer::new(7, "b@example.com");
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_json() {
        let customer = Customer::new(42, "42-42-42");
        let json = serde_json::to_string(&customer).unwrap();
        assert_eq!(json, r#"{"id":42,"contact":"42-42-42"}"#);
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, customer);
    }
}
