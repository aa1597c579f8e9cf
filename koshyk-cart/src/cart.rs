use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use koshyk_catalog::Product;

use crate::iter::CartIter;

/// Cart-related errors
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Quantity must be a number")]
    NonNumericQuantity,

    #[error("Quantity must be positive")]
    NonPositiveQuantity,
}

/// One product line in a cart. The stored quantity is always finite and
/// strictly positive; a line that would drop to zero or below is deleted
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: f64,
}

/// A named cart: an insertion-ordered mapping from product to quantity.
///
/// Products are keyed by identity (their `id`), so adding the same
/// constructed product twice accumulates one line, while two separately
/// constructed products with the same name and price stay separate lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub name: String,
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    fn check_quantity(quantity: f64) -> Result<(), CartError> {
        if !quantity.is_finite() {
            tracing::debug!("Quantity must be a number");
            return Err(CartError::NonNumericQuantity);
        }
        if quantity <= 0.0 {
            tracing::debug!("Quantity must be positive");
            return Err(CartError::NonPositiveQuantity);
        }
        Ok(())
    }

    /// Find-or-insert accumulation shared by `add_product` and `merge`.
    /// Callers must have validated the quantity already.
    fn accumulate(&mut self, product: &Product, quantity: f64) {
        match self.entries.iter_mut().find(|e| e.product == *product) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(CartEntry {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Add `quantity` of a product, creating the line if absent.
    pub fn add_product(&mut self, product: &Product, quantity: f64) -> Result<(), CartError> {
        Self::check_quantity(quantity)?;
        self.accumulate(product, quantity);
        Ok(())
    }

    /// Remove `quantity` of a product. A line that drops to zero or below
    /// is deleted; removing a product that is not in the cart is a no-op.
    pub fn remove_product(&mut self, product: &Product, quantity: f64) -> Result<(), CartError> {
        Self::check_quantity(quantity)?;

        if let Some(pos) = self.entries.iter().position(|e| e.product == *product) {
            self.entries[pos].quantity -= quantity;
            if self.entries[pos].quantity <= 0.0 {
                self.entries.remove(pos);
            }
        }
        Ok(())
    }

    /// Replay every line of `other` into this cart, in `other`'s insertion
    /// order. Returns `&mut self` so merges can be chained.
    pub fn merge(&mut self, other: &Cart) -> &mut Self {
        for entry in &other.entries {
            self.accumulate(&entry.product, entry.quantity);
        }
        self
    }

    /// Total price of the cart: Σ(price × quantity). Zero when empty.
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.product.price * e.quantity)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (product, quantity) pairs in insertion order.
    ///
    /// The iterator snapshots the cart at creation time: mutating the cart
    /// afterwards does not change what an already created iterator yields,
    /// and each call starts over from the current state.
    pub fn iter(&self) -> CartIter {
        CartIter::new(&self.entries)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = (Product, f64);
    type IntoIter = CartIter;

    fn into_iter(self) -> CartIter {
        self.iter()
    }
}

/// `+=` merges another cart into this one, line by line.
impl AddAssign<&Cart> for Cart {
    fn add_assign(&mut self, other: &Cart) {
        self.merge(other);
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for entry in &self.entries {
            writeln!(
                f,
                "{}: {} x {} UAH = {} UAH",
                entry.product.name,
                entry.quantity,
                entry.product.price,
                entry.quantity * entry.product.price
            )?;
        }
        write!(f, "Total {}: {} UAH", self.name, self.total())
    }
}
