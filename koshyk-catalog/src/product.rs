use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Date layout used on price tags, e.g. `14.11.2024`.
pub const EXPIRY_FORMAT: &str = "%d.%m.%Y";

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Price must be a number")]
    NonNumericPrice,

    #[error("Price must be positive")]
    NonPositivePrice,

    #[error("Invalid expiration date: {0}")]
    InvalidExpiry(#[from] chrono::ParseError),
}

/// A catalog item with a display name and a unit price in UAH.
///
/// Perishable goods carry an expiration date; everything else leaves
/// `expires_on` empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub expires_on: Option<NaiveDate>,
}

impl Product {
    /// Create a plain product. The price must be a finite, positive number.
    pub fn new(name: &str, price: f64) -> Result<Self, CatalogError> {
        if !price.is_finite() {
            tracing::debug!("Price must be a number");
            return Err(CatalogError::NonNumericPrice);
        }
        if price <= 0.0 {
            tracing::debug!("Price must be positive");
            return Err(CatalogError::NonPositivePrice);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            expires_on: None,
        })
    }

    /// Create a perishable product from a `dd.mm.yyyy` expiration date.
    pub fn perishable(name: &str, price: f64, expires_on: &str) -> Result<Self, CatalogError> {
        let mut product = Self::new(name, price)?;
        product.expires_on = Some(NaiveDate::parse_from_str(expires_on, EXPIRY_FORMAT)?);
        Ok(product)
    }

    pub fn is_perishable(&self) -> bool {
        self.expires_on.is_some()
    }
}

/// Two products are equal only if they are the same constructed instance
/// (same `id`). Separately constructed products with identical name and
/// price stay distinct cart keys; clones alias the same key.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)?;
        if let Some(date) = self.expires_on {
            write!(f, " (expires on {})", date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_product_displays_name_and_price() {
        let product = Product::new("Fanta", 10.0).unwrap();
        assert_eq!(product.name, "Fanta");
        assert_eq!(product.price, 10.0);
        assert!(!product.is_perishable());
        assert_eq!(product.to_string(), "Fanta: 10");
    }

    #[test]
    fn fractional_price_displays_as_written() {
        let product = Product::new("Bread", 12.5).unwrap();
        assert_eq!(product.to_string(), "Bread: 12.5");
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert!(matches!(
            Product::new("X", -5.0),
            Err(CatalogError::NonPositivePrice)
        ));
        assert!(matches!(
            Product::new("X", 0.0),
            Err(CatalogError::NonPositivePrice)
        ));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        assert!(matches!(
            Product::new("X", f64::NAN),
            Err(CatalogError::NonNumericPrice)
        ));
        assert!(matches!(
            Product::new("X", f64::INFINITY),
            Err(CatalogError::NonNumericPrice)
        ));
    }

    #[test]
    fn perishable_parses_expiration_date() {
        let butter = Product::perishable("Butter", 20.0, "14.11.2024").unwrap();
        assert!(butter.is_perishable());
        assert_eq!(butter.to_string(), "Butter: 20 (expires on 2024-11-14)");
    }

    #[test]
    fn malformed_expiration_date_is_rejected() {
        assert!(matches!(
            Product::perishable("Milk", 15.0, "2024-11-14"),
            Err(CatalogError::InvalidExpiry(_))
        ));
        assert!(matches!(
            Product::perishable("Milk", 15.0, "not a date"),
            Err(CatalogError::InvalidExpiry(_))
        ));
    }

    #[test]
    fn equality_is_per_instance() {
        let a = Product::new("Fanta", 10.0).unwrap();
        let b = Product::new("Fanta", 10.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
