pub mod processor;

pub use processor::{
    processor_for, BasePaymentProcessor, CreditCardProcessor, DebitCardProcessor,
    GooglePayProcessor, PaymentMethod, PaymentProcessor,
};
