use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use koshyk_catalog::Product;

use crate::cart::{Cart, CartError};
use crate::iter::CartIter;

/// A cart meant for perishable goods.
///
/// Behaves exactly like [`Cart`]; the type only documents intent and what
/// its iteration is expected to yield. Nothing stops a non-perishable
/// product from going in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerishableCart {
    cart: Cart,
}

impl PerishableCart {
    pub fn new(name: &str) -> Self {
        Self {
            cart: Cart::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.cart.name
    }

    pub fn add_product(&mut self, product: &Product, quantity: f64) -> Result<(), CartError> {
        self.cart.add_product(product, quantity)
    }

    pub fn remove_product(&mut self, product: &Product, quantity: f64) -> Result<(), CartError> {
        self.cart.remove_product(product, quantity)
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn iter(&self) -> CartIter {
        self.cart.iter()
    }

    /// The underlying cart, for merging into a general one.
    pub fn as_cart(&self) -> &Cart {
        &self.cart
    }
}

impl<'a> IntoIterator for &'a PerishableCart {
    type Item = (Product, f64);
    type IntoIter = CartIter;

    fn into_iter(self) -> CartIter {
        self.iter()
    }
}

/// `+=` merges a perishable cart into a general cart.
impl AddAssign<&PerishableCart> for Cart {
    fn add_assign(&mut self, other: &PerishableCart) {
        self.merge(other.as_cart());
    }
}

impl fmt::Display for PerishableCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cart, f)
    }
}
