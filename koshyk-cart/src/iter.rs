use koshyk_catalog::Product;

use crate::cart::CartEntry;

/// Snapshot iterator over a cart's (product, quantity) pairs.
///
/// The ordered pairs are captured in one pass when the iterator is
/// created, so mutating the cart mid-iteration cannot desynchronize
/// products from quantities or change what this iterator yields.
pub struct CartIter {
    pairs: std::vec::IntoIter<(Product, f64)>,
}

impl CartIter {
    pub(crate) fn new(entries: &[CartEntry]) -> Self {
        let pairs: Vec<(Product, f64)> = entries
            .iter()
            .map(|e| (e.product.clone(), e.quantity))
            .collect();
        Self {
            pairs: pairs.into_iter(),
        }
    }
}

impl Iterator for CartIter {
    type Item = (Product, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for CartIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    #[test]
    fn yields_pairs_in_insertion_order() {
        let fanta = Product::new("Fanta", 10.0).unwrap();
        let solt = Product::new("Solt", 5.0).unwrap();
        let mut cart = Cart::new("test");
        cart.add_product(&fanta, 2.0).unwrap();
        cart.add_product(&solt, 3.0).unwrap();

        let names: Vec<String> = cart.iter().map(|(p, _)| p.name).collect();
        assert_eq!(names, ["Fanta", "Solt"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let fanta = Product::new("Fanta", 10.0).unwrap();
        let solt = Product::new("Solt", 5.0).unwrap();
        let mut cart = Cart::new("test");
        cart.add_product(&fanta, 2.0).unwrap();
        cart.add_product(&solt, 3.0).unwrap();

        let first: Vec<(Product, f64)> = cart.iter().collect();
        let second: Vec<(Product, f64)> = cart.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_ignores_later_mutation() {
        let fanta = Product::new("Fanta", 10.0).unwrap();
        let solt = Product::new("Solt", 5.0).unwrap();
        let mut cart = Cart::new("test");
        cart.add_product(&fanta, 2.0).unwrap();

        let iter = cart.iter();
        cart.add_product(&solt, 3.0).unwrap();
        cart.remove_product(&fanta, 2.0).unwrap();

        let pairs: Vec<(Product, f64)> = iter.collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.name, "Fanta");
        assert_eq!(pairs[0].1, 2.0);
    }

    #[test]
    fn for_loop_over_cart_reference() {
        let fanta = Product::new("Fanta", 10.0).unwrap();
        let mut cart = Cart::new("test");
        cart.add_product(&fanta, 4.0).unwrap();

        let mut seen = 0;
        for (product, quantity) in &cart {
            assert_eq!(product.price * quantity, 40.0);
            seen += 1;
        }
        assert_eq!(seen, 1);
    }
}
