//! Per-session cart-line state.
//!
//! Lines are created from the catalog at startup and own their quantities.
//! The catalog itself stays immutable; nothing here survives a restart.

use crate::catalog::{Catalog, Price, Product};

/// Quantity a line starts with when the session opens.
pub const INITIAL_LINE_QUANTITY: u32 = 1;

/// One mutable cart line paired with an immutable catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    pub fn total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Session-scoped cart: one line per catalog product, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCart {
    lines: Vec<CartLine>,
}

impl SessionCart {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            lines: catalog
                .iter()
                .map(|product| CartLine {
                    product: product.clone(),
                    quantity: INITIAL_LINE_QUANTITY,
                })
                .collect(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.name == name)
    }

    /// Quantity for `name`, or zero when no such line exists.
    pub fn quantity(&self, name: &str) -> u32 {
        self.line(name).map(|line| line.quantity).unwrap_or(0)
    }

    /// Increase the quantity for `name`. Saturates instead of wrapping.
    pub fn increment(&mut self, name: &str) {
        if let Some(line) = self.line_mut(name) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity for `name`, stopping at zero.
    pub fn decrement(&mut self, name: &str) {
        if let Some(line) = self.line_mut(name) {
            line.quantity = line.quantity.saturating_sub(1);
        }
    }

    /// Sum of price × quantity across all lines. Display only; no checkout
    /// processing hangs off this.
    pub fn subtotal(&self) -> Price {
        Price::from_cents(
            self.lines
                .iter()
                .map(|line| line.total().cents())
                .fold(0u64, u64::saturating_add),
        )
    }

    fn line_mut(&mut self, name: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_follow_catalog_order() {
        let cart = SessionCart::new(&Catalog::sample());
        let names: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.name.as_str())
            .collect();
        assert_eq!(names, ["Make up fix", "Lotion", "Cleansing Foam"]);
    }

    #[test]
    fn lines_start_at_one() {
        let cart = SessionCart::new(&Catalog::sample());
        assert!(cart.lines().iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut cart = SessionCart::new(&Catalog::sample());
        cart.decrement("Lotion");
        assert_eq!(cart.quantity("Lotion"), 0);
        cart.decrement("Lotion");
        assert_eq!(cart.quantity("Lotion"), 0);
    }

    #[test]
    fn unknown_name_is_a_noop() {
        let mut cart = SessionCart::new(&Catalog::sample());
        cart.increment("No Such Product");
        assert_eq!(cart.quantity("No Such Product"), 0);
        assert_eq!(cart.quantity("Lotion"), 1);
    }
}
