//! Session and cart context handed to views.
//!
//! Auth and cart live outside the storefront core. Views receive a
//! read-only snapshot at construction and never write to it.

use serde::{Deserialize, Serialize};

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One cart line, as far as the navbar cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Cart contents for the badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
}

impl CartSummary {
    /// Total units across lines, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Read-only session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContext {
    pub customer: Option<Customer>,
    pub cart: CartSummary,
}

impl StoreContext {
    /// A visitor with an empty cart.
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_cart(mut self, cart: CartSummary) -> Self {
        self.cart = cart;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.customer.is_some()
    }

    /// Cart badge text; `None` hides the badge.
    pub fn cart_badge(&self) -> Option<String> {
        match self.cart.item_count() {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32) -> CartLine {
        CartLine {
            product_id: "p".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = CartSummary {
            items: vec![line(2), line(3)],
        };
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_item_count_saturates() {
        let cart = CartSummary {
            items: vec![line(u32::MAX), line(5)],
        };
        assert_eq!(cart.item_count(), u32::MAX);
        let ctx = StoreContext::guest().with_cart(cart);
        assert_eq!(ctx.cart_badge().as_deref(), Some("99+"));
    }

    #[test]
    fn test_guest_has_no_badge() {
        let ctx = StoreContext::guest();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.cart_badge(), None);
    }

    #[test]
    fn test_badge_caps_at_99() {
        let ctx = StoreContext::guest().with_cart(CartSummary {
            items: vec![line(150)],
        });
        assert_eq!(ctx.cart_badge().as_deref(), Some("99+"));
    }
}
