//! Cart
//!
//! Ordered, in-memory list of picked products. One line per product id.

use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
}

/// Line appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added;

/// Duplicate add; the cart was left as it was
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name} is already in your cart!")]
pub struct AlreadyPresent {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Removed {
    Line(CartLine),
    Absent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ProductId, name: &str, price: u64) -> Result<Added, AlreadyPresent> {
        if self.contains(id) {
            return Err(AlreadyPresent { id, name: name.to_string() });
        }
        self.lines.push(CartLine { id, name: name.to_string(), price });
        Ok(Added)
    }

    /// Removing an id that is not in the cart is a no-op
    pub fn remove(&mut self, id: ProductId) -> Removed {
        match self.lines.iter().position(|line| line.id == id) {
            Some(index) => Removed::Line(self.lines.remove(index)),
            None => Removed::Absent,
        }
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Saturates instead of overflowing
    pub fn total(&self) -> u64 {
        self.lines.iter().fold(0, |sum, line| sum.saturating_add(line.price))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.lines.iter().any(|line| line.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(2, "Neem", 300), Ok(Added));
        assert_eq!(cart.add(1, "Mango", 500), Ok(Added));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut cart = Cart::new();
        cart.add(10, "Mango", 300).unwrap();

        let err = cart.add(10, "Mango", 999).unwrap_err();
        assert_eq!(err.id, 10);
        assert_eq!(err.to_string(), "Mango is already in your cart!");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 300);
    }

    #[test]
    fn test_total_is_sum_of_prices() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);
        cart.add(1, "a", 300).unwrap();
        cart.add(2, "b", 1200).unwrap();
        cart.add(3, "c", 500).unwrap();
        assert_eq!(cart.total(), cart.lines().iter().map(|l| l.price).sum::<u64>());
        assert_eq!(cart.total(), 2000);

        cart.remove(2);
        assert_eq!(cart.total(), 800);
    }

    #[test]
    fn test_total_saturates() {
        let mut cart = Cart::new();
        cart.add(1, "a", u64::MAX).unwrap();
        cart.add(2, "b", u64::MAX).unwrap();
        cart.add(3, "c", 500).unwrap();
        assert_eq!(cart.total(), u64::MAX);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(1, "a", 300).unwrap();
        let before = cart.clone();

        assert_eq!(cart.remove(42), Removed::Absent);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_returns_line() {
        let mut cart = Cart::new();
        cart.add(1, "a", 300).unwrap();
        cart.add(2, "b", 400).unwrap();

        match cart.remove(1) {
            Removed::Line(line) => assert_eq!(line.name, "a"),
            Removed::Absent => panic!("line 1 should have been removed"),
        }
        assert!(!cart.contains(1));
        assert_eq!(cart.len(), 1);

        cart.remove(2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_names_with_quotes() {
        let mut cart = Cart::new();
        cart.add(7, "Devil's \"Ivy\"", 250).unwrap();
        assert_eq!(cart.lines()[0].name, "Devil's \"Ivy\"");
    }
}
