use serde::{Deserialize, Serialize};

use koshyk_cart::Cart;

/// How the shopper chose to pay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    DebitCard,
    CreditCard,
    GooglePay,
}

impl PaymentMethod {
    /// Map free-form prompt input to a method. The match is exact and
    /// case-sensitive: `Debit` and `credit` are the only recognized
    /// literals; anything else (including empty input) falls back to
    /// GooglePay.
    pub fn from_prompt(input: &str) -> Self {
        match input {
            "Debit" => PaymentMethod::DebitCard,
            "credit" => PaymentMethod::CreditCard,
            _ => PaymentMethod::GooglePay,
        }
    }
}

/// Announces a payment for a cart's current total. No money moves.
pub trait PaymentProcessor {
    fn pay(&self, cart: &Cart) -> String;
}

/// Fallback processor that names no payment method.
pub struct BasePaymentProcessor;

impl PaymentProcessor for BasePaymentProcessor {
    fn pay(&self, cart: &Cart) -> String {
        format!("Payment for {} UAH is in progress...", cart.total())
    }
}

pub struct DebitCardProcessor;

impl PaymentProcessor for DebitCardProcessor {
    fn pay(&self, cart: &Cart) -> String {
        let message = format!(
            "Payment for {} UAH by debit card is in progress...",
            cart.total()
        );
        tracing::info!("{}", message);
        message
    }
}

pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn pay(&self, cart: &Cart) -> String {
        let message = format!(
            "Payment for {} UAH by credit card is in progress...",
            cart.total()
        );
        tracing::info!("{}", message);
        message
    }
}

pub struct GooglePayProcessor;

impl PaymentProcessor for GooglePayProcessor {
    fn pay(&self, cart: &Cart) -> String {
        let message = format!(
            "Payment for {} UAH by GooglePay is in progress...",
            cart.total()
        );
        tracing::info!("{}", message);
        message
    }
}

/// Select the processor for an explicitly chosen method.
pub fn processor_for(method: PaymentMethod) -> Box<dyn PaymentProcessor> {
    match method {
        PaymentMethod::DebitCard => Box::new(DebitCardProcessor),
        PaymentMethod::CreditCard => Box::new(CreditCardProcessor),
        PaymentMethod::GooglePay => Box::new(GooglePayProcessor),
    }
}
