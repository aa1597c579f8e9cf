use std::io;

use anyhow::Result;

use koshyk_cart::{Cart, CartError, PerishableCart};
use koshyk_catalog::Product;
use koshyk_payment::{processor_for, PaymentMethod};

use crate::config::{Config, ItemSpec};

/// Build products from their shopping-list lines. A line that fails
/// validation is reported and dropped; the rest keep going.
fn build_products(specs: &[ItemSpec]) -> Vec<(Product, f64)> {
    let mut built = Vec::new();
    for item in specs {
        let product = match &item.expires_on {
            Some(date) => Product::perishable(&item.name, item.price, date),
            None => Product::new(&item.name, item.price),
        };
        match product {
            Ok(product) => built.push((product, item.quantity)),
            Err(err) => println!("{}", err),
        }
    }
    built
}

/// Fill both carts. The first failure aborts the rest of the phase and is
/// reported by the caller; whatever was added before it stays.
fn populate(
    cart: &mut Cart,
    fridge: &mut PerishableCart,
    staples: &[(Product, f64)],
    perishables: &[(Product, f64)],
) -> Result<(), CartError> {
    for (product, quantity) in staples {
        cart.add_product(product, *quantity)?;
    }
    for (product, quantity) in perishables {
        fridge.add_product(product, *quantity)?;
    }
    Ok(())
}

fn prompt_method() -> Result<PaymentMethod> {
    println!("Debit / credit card or GooglePay?");
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(PaymentMethod::from_prompt(
        answer.trim_end_matches(['\r', '\n']),
    ))
}

pub fn run(config: &Config) -> Result<()> {
    let staples = build_products(&config.items);
    let perishables = build_products(&config.perishables);

    let mut cart = Cart::new(&config.carts.main);
    let mut fridge = PerishableCart::new(&config.carts.perishable);

    if let Err(err) = populate(&mut cart, &mut fridge, &staples, &perishables) {
        println!("{}", err);
    }

    cart += &fridge;

    let method = match config.payment.method {
        Some(method) => method,
        None => prompt_method()?,
    };
    let processor = processor_for(method);

    if cart.total() > 0.0 {
        println!("{}", cart);
        println!("{}", fridge);
        println!("{}", processor.pay(&cart));
    }

    for (product, quantity) in &cart {
        println!("{} x {} = {} UAH.", product, quantity, product.price * quantity);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: f64, expires_on: Option<&str>) -> ItemSpec {
        ItemSpec {
            name: name.to_string(),
            price,
            quantity,
            expires_on: expires_on.map(str::to_string),
        }
    }

    #[test]
    fn invalid_lines_are_dropped_and_the_rest_survive() {
        let built = build_products(&[
            item("Fanta", 10.0, 2.0, None),
            item("Broken", -5.0, 1.0, None),
            item("Milk", 15.0, 4.0, Some("14.11.2024")),
            item("Stale", 15.0, 4.0, Some("yesterday")),
        ]);

        let names: Vec<&str> = built.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(names, ["Fanta", "Milk"]);
    }

    #[test]
    fn populate_fills_both_carts() {
        let staples = build_products(&[item("Fanta", 10.0, 2.0, None)]);
        let perishables = build_products(&[item("Butter", 20.0, 3.0, Some("14.11.2024"))]);

        let mut cart = Cart::new("CART1+2");
        let mut fridge = PerishableCart::new("CART2");
        populate(&mut cart, &mut fridge, &staples, &perishables).unwrap();

        assert_eq!(cart.total(), 20.0);
        assert_eq!(fridge.total(), 60.0);

        cart += &fridge;
        assert_eq!(cart.total(), 80.0);
    }
}
