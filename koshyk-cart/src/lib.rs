pub mod cart;
pub mod iter;
pub mod perishable;

pub use cart::{Cart, CartEntry, CartError};
pub use iter::CartIter;
pub use perishable::PerishableCart;
