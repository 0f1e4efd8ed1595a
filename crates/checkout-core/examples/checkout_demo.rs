//! Scripted checkout scenarios: cash payments, then a credit card payment
//! corrected field by field between attempts.
//!
//! Run with `cargo run --example checkout_demo`. Success events come from
//! the processors via tracing; failure text comes from the caller-side
//! message table.

use checkout_core::{
    failure_message, CardDetails, CashProcessor, CreditCardProcessor, Money, PaymentProcessor,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// One attempt: process, and report the outcome the way a register would.
fn attempt(processor: &dyn PaymentProcessor, amount: Money, purchase_price: Money) {
    if let Err(error) = processor.process_payment(amount, purchase_price) {
        warn!(
            "{}",
            failure_message(processor.method(), error, amount, purchase_price)
        );
    }
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,checkout_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // --- Cash ---------------------------------------------------------------
    let mut cash = CashProcessor::new();
    let purchase_price = Money::from_cents(2050); // $20.50

    // Exact payment succeeds
    attempt(&cash, Money::from_cents(2050), purchase_price);

    // $5.00 short
    attempt(&cash, Money::from_cents(1550), purchase_price);

    // Right amount, wrong bills
    cash.bills_are_counterfeit = true;
    attempt(&cash, Money::from_cents(2050), purchase_price);

    // --- Credit card --------------------------------------------------------
    let mut card = CreditCardProcessor::new(CardDetails::new(
        "Jake Peralta",
        "jakeperalta@gmail.com",
        "1234123412341234",
        "1230",
        "345",
        "90210",
    ));
    let purchase_price = Money::from_cents(50000); // $500.00

    // Balance too low
    attempt(&card, Money::from_cents(2050), purchase_price);

    // Full balance, every field valid
    attempt(&card, Money::from_cents(50000), purchase_price);

    // Each correction cycle breaks one field, attempts, then fixes it
    card.card.cvc = "8098".to_string();
    attempt(&card, Money::from_cents(50000), purchase_price);

    card.card.cvc = "345".to_string();
    card.card.email = "jakeperalta&gmail.com".to_string();
    attempt(&card, Money::from_cents(50000), purchase_price);

    card.card.email = "jakeperalta@gmail.com".to_string();
    card.card.zip = "9021".to_string();
    attempt(&card, Money::from_cents(50000), purchase_price);

    card.card.zip = "90210".to_string();
    card.card.name = "Jake$ P. Peralta-Higgins".to_string();
    attempt(&card, Money::from_cents(50000), purchase_price);

    card.card.name = "Jake S. Peralta".to_string();
    card.card.expiration = "0924".to_string();
    attempt(&card, Money::from_cents(50000), purchase_price);
}
