//! # Customer-Facing Messages
//!
//! Maps a failed payment attempt to display text.
//!
//! This is caller-side logic: processors classify failures, and this module
//! owns the wording shown at the register. Keeping the table here means a
//! host can swap it out without touching processing rules.
//!
//! Each payment method has its own table. A kind that a method's table does
//! not enumerate falls through to a generic retry message; that fallback is
//! the normal path for mismatched kinds, not a fatal condition.

use crate::error::PaymentError;
use crate::money::Money;
use crate::types::PaymentMethod;

/// Display text for a failed payment attempt.
///
/// `amount` and `purchase_price` are the values from the failed attempt;
/// the cash shortfall message is computed from them.
///
/// ## Example
/// ```rust
/// use checkout_core::error::PaymentError;
/// use checkout_core::messages::failure_message;
/// use checkout_core::money::Money;
/// use checkout_core::types::PaymentMethod;
///
/// let msg = failure_message(
///     PaymentMethod::Cash,
///     PaymentError::InsufficientFunds,
///     Money::from_cents(1550),
///     Money::from_cents(2050),
/// );
/// assert_eq!(msg, "Cash payment failed. Please insert $5.00 more.");
/// ```
pub fn failure_message(
    method: PaymentMethod,
    error: PaymentError,
    amount: Money,
    purchase_price: Money,
) -> String {
    match method {
        PaymentMethod::Cash => cash_failure_message(error, amount, purchase_price),
        PaymentMethod::CreditCard => credit_card_failure_message(error),
    }
}

fn cash_failure_message(error: PaymentError, amount: Money, purchase_price: Money) -> String {
    const PREFIX: &str = "Cash payment failed.";

    match error {
        PaymentError::InsufficientFunds => {
            let shortfall = purchase_price - amount;
            format!("{PREFIX} Please insert {shortfall} more.")
        }
        PaymentError::CounterfeitBills => format!(
            "{PREFIX} We are unable to accept these bills because they are not legal tender."
        ),
        _ => unknown_error_message(PREFIX),
    }
}

fn credit_card_failure_message(error: PaymentError) -> String {
    const PREFIX: &str = "Credit card payment failed.";

    match error {
        PaymentError::InsufficientFunds => {
            format!("{PREFIX} Your credit card balance is too low.")
        }
        PaymentError::InvalidNameOnCard => format!("{PREFIX} Invalid card name."),
        PaymentError::InvalidEmailAddress => format!("{PREFIX} Invalid email address."),
        PaymentError::InvalidCardNumber => format!("{PREFIX} Invalid credit card number."),
        PaymentError::InvalidExpirationDate => format!("{PREFIX} Invalid expiration date."),
        PaymentError::InvalidCvc => format!("{PREFIX} Invalid CVC code."),
        PaymentError::InvalidZipCode => format!("{PREFIX} Invalid Zip code."),
        _ => unknown_error_message(PREFIX),
    }
}

fn unknown_error_message(prefix: &str) -> String {
    format!("{prefix} There was an unknown error. Please try again or use a different payment method.")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_shortfall_message() {
        let msg = failure_message(
            PaymentMethod::Cash,
            PaymentError::InsufficientFunds,
            Money::from_cents(1550),
            Money::from_cents(2050),
        );
        assert_eq!(msg, "Cash payment failed. Please insert $5.00 more.");
    }

    #[test]
    fn test_cash_counterfeit_message() {
        let msg = failure_message(
            PaymentMethod::Cash,
            PaymentError::CounterfeitBills,
            Money::from_cents(2050),
            Money::from_cents(2050),
        );
        assert_eq!(
            msg,
            "Cash payment failed. We are unable to accept these bills because they are not legal tender."
        );
    }

    #[test]
    fn test_credit_card_field_messages() {
        let amount = Money::from_cents(50000);
        let cases = [
            (
                PaymentError::InsufficientFunds,
                "Credit card payment failed. Your credit card balance is too low.",
            ),
            (
                PaymentError::InvalidNameOnCard,
                "Credit card payment failed. Invalid card name.",
            ),
            (
                PaymentError::InvalidEmailAddress,
                "Credit card payment failed. Invalid email address.",
            ),
            (
                PaymentError::InvalidCardNumber,
                "Credit card payment failed. Invalid credit card number.",
            ),
            (
                PaymentError::InvalidExpirationDate,
                "Credit card payment failed. Invalid expiration date.",
            ),
            (
                PaymentError::InvalidCvc,
                "Credit card payment failed. Invalid CVC code.",
            ),
            (
                PaymentError::InvalidZipCode,
                "Credit card payment failed. Invalid Zip code.",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(
                failure_message(PaymentMethod::CreditCard, error, amount, amount),
                expected
            );
        }
    }

    #[test]
    fn test_unmapped_kind_falls_through_to_generic() {
        // A card-field kind under the cash table is not enumerated there
        let msg = failure_message(
            PaymentMethod::Cash,
            PaymentError::InvalidCvc,
            Money::from_cents(100),
            Money::from_cents(100),
        );
        assert_eq!(
            msg,
            "Cash payment failed. There was an unknown error. Please try again or use a different payment method."
        );

        // And counterfeit bills mean nothing to the card table
        let msg = failure_message(
            PaymentMethod::CreditCard,
            PaymentError::CounterfeitBills,
            Money::from_cents(100),
            Money::from_cents(100),
        );
        assert_eq!(
            msg,
            "Credit card payment failed. There was an unknown error. Please try again or use a different payment method."
        );
    }

    #[test]
    fn test_unknown_kind_maps_to_generic_for_both_methods() {
        for method in [PaymentMethod::Cash, PaymentMethod::CreditCard] {
            let msg = failure_message(
                method,
                PaymentError::Unknown,
                Money::zero(),
                Money::zero(),
            );
            assert!(msg.ends_with(
                "There was an unknown error. Please try again or use a different payment method."
            ));
        }
    }
}
