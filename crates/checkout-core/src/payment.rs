//! # Payment Processing
//!
//! The two payment strategies and the trait they share.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_payment(amount, price)                       │
//! │                                                                         │
//! │  Cash                              Credit card                          │
//! │  ────                              ───────────                          │
//! │  amount < price?                   amount < price?                      │
//! │    └─► Err(InsufficientFunds)        └─► Err(InsufficientFunds)        │
//! │  bills counterfeit?                any field invalid?                   │
//! │    └─► Err(CounterfeitBills)         └─► Err(first failing field)      │
//! │  Ok + success event                Ok + success event                   │
//! │                                                                         │
//! │  Every attempt is stateless and synchronous. Exactly one error per     │
//! │  failed attempt; the caller decides whether to correct and retry.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::PaymentError;
use crate::money::Money;
use crate::types::{CardDetails, FieldValidation, PaymentMethod};
use crate::validation::validate_card_fields;

// =============================================================================
// Payment Processor Trait
// =============================================================================

/// A payment strategy.
///
/// Implemented by exactly two types, [`CashProcessor`] and
/// [`CreditCardProcessor`]. Callers that accept either hold a
/// `&dyn PaymentProcessor`.
pub trait PaymentProcessor {
    /// Which message table this processor's failures belong to.
    fn method(&self) -> PaymentMethod;

    /// Attempts the payment.
    ///
    /// Returns `Ok(())` on success (after emitting a success event carrying
    /// the amount as `$X.YY`), or exactly one [`PaymentError`] describing
    /// the first thing that went wrong.
    fn process_payment(&self, amount: Money, purchase_price: Money) -> Result<(), PaymentError>;
}

// =============================================================================
// Cash
// =============================================================================

/// Cash payment strategy.
///
/// The counterfeit flag is caller-owned state: a drawer-side check sets it
/// before the attempt, and the processor refuses the bills while it is set.
#[derive(Debug, Clone, Default)]
pub struct CashProcessor {
    /// Set when the tendered bills failed the counterfeit check.
    pub bills_are_counterfeit: bool,
}

impl CashProcessor {
    /// Creates a cash processor with the counterfeit flag cleared.
    pub fn new() -> Self {
        CashProcessor::default()
    }
}

impl PaymentProcessor for CashProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Cash
    }

    fn process_payment(&self, amount: Money, purchase_price: Money) -> Result<(), PaymentError> {
        debug!(%amount, %purchase_price, "processing cash payment");

        if amount < purchase_price {
            return Err(PaymentError::InsufficientFunds);
        }
        if self.bills_are_counterfeit {
            return Err(PaymentError::CounterfeitBills);
        }

        info!("Cash payment in the amount of {amount} succeeded!");
        Ok(())
    }
}

// =============================================================================
// Credit Card
// =============================================================================

/// Credit card payment strategy.
///
/// Holds the raw card details, caller-owned and mutable: correcting a field
/// between attempts changes the next attempt only. The validation report is
/// derived on every call, never cached.
#[derive(Debug, Clone)]
pub struct CreditCardProcessor {
    /// Raw card input; validated on each processing attempt.
    pub card: CardDetails,
}

impl CreditCardProcessor {
    /// Creates a processor around the given card details.
    pub fn new(card: CardDetails) -> Self {
        CreditCardProcessor { card }
    }

    /// The full six-row validation report for the current field values.
    ///
    /// Recomputed from scratch on every call. Mutating a field on
    /// [`Self::card`] changes the next report, nothing else.
    pub fn validations(&self) -> Vec<FieldValidation> {
        validate_card_fields(&self.card)
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn process_payment(&self, amount: Money, purchase_price: Money) -> Result<(), PaymentError> {
        debug!(%amount, %purchase_price, "processing credit card payment");

        if amount < purchase_price {
            return Err(PaymentError::InsufficientFunds);
        }

        // First failing field wins, in the fixed report order
        if let Some(failed) = self.validations().into_iter().find(|v| !v.passed) {
            return Err(failed.error);
        }

        info!("Credit card payment in the amount of {amount} succeeded!");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> CardDetails {
        CardDetails::new(
            "Jake Peralta",
            "jakeperalta@gmail.com",
            "1234123412341234",
            "1299", // far-future expiration keeps these tests time-stable
            "345",
            "90210",
        )
    }

    #[test]
    fn test_both_processors_fail_on_insufficient_funds() {
        let amount = Money::from_cents(1550);
        let price = Money::from_cents(2050);

        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            Box::new(CashProcessor::new()),
            Box::new(CreditCardProcessor::new(valid_card())),
        ];

        for processor in &processors {
            assert_eq!(
                processor.process_payment(amount, price),
                Err(PaymentError::InsufficientFunds)
            );
        }
    }

    #[test]
    fn test_insufficient_funds_beats_invalid_fields() {
        // Broken card, but the funds check fires first
        let mut card = valid_card();
        card.cvc = "8098".to_string();
        let processor = CreditCardProcessor::new(card);

        assert_eq!(
            processor.process_payment(Money::from_cents(100), Money::from_cents(200)),
            Err(PaymentError::InsufficientFunds)
        );
    }

    #[test]
    fn test_cash_counterfeit_flag() {
        let amount = Money::from_cents(2050);
        let price = Money::from_cents(2050);

        let mut processor = CashProcessor::new();
        assert_eq!(processor.process_payment(amount, price), Ok(()));

        processor.bills_are_counterfeit = true;
        assert_eq!(
            processor.process_payment(amount, price),
            Err(PaymentError::CounterfeitBills)
        );
    }

    #[test]
    fn test_credit_card_happy_path() {
        let processor = CreditCardProcessor::new(valid_card());
        let amount = Money::from_cents(50000); // $500.00
        let price = Money::from_cents(50000);

        assert_eq!(processor.process_payment(amount, price), Ok(()));
    }

    #[test]
    fn test_credit_card_bad_email_fails_with_email_kind() {
        let mut card = valid_card();
        card.email = "jakeperalta&gmail.com".to_string();
        let processor = CreditCardProcessor::new(card);

        let amount = Money::from_cents(50000);
        assert_eq!(
            processor.process_payment(amount, amount),
            Err(PaymentError::InvalidEmailAddress)
        );
    }

    #[test]
    fn test_first_failing_field_wins() {
        // Email (report position 2) and cvc (position 5) both broken:
        // the email error surfaces
        let mut card = valid_card();
        card.email = "nope".to_string();
        card.cvc = "12".to_string();
        let processor = CreditCardProcessor::new(card);

        let amount = Money::from_cents(1000);
        assert_eq!(
            processor.process_payment(amount, amount),
            Err(PaymentError::InvalidEmailAddress)
        );
    }

    #[test]
    fn test_correcting_a_field_changes_the_next_attempt() {
        let mut processor = CreditCardProcessor::new(valid_card());
        processor.card.zip = "9021".to_string();

        let amount = Money::from_cents(1000);
        assert_eq!(
            processor.process_payment(amount, amount),
            Err(PaymentError::InvalidZipCode)
        );

        processor.card.zip = "90210".to_string();
        assert_eq!(processor.process_payment(amount, amount), Ok(()));
    }

    #[test]
    fn test_validations_are_recomputed_not_cached() {
        let mut processor = CreditCardProcessor::new(valid_card());
        assert!(processor.validations().iter().all(|v| v.passed));

        processor.card.number = "1234".to_string();
        let report = processor.validations();
        assert!(report.iter().any(|v| !v.passed));
    }
}
