//! # Validation Module
//!
//! Card field validation rules for checkout-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Card Validation Pipeline                           │
//! │                                                                         │
//! │  Six independent rules, each a pure fn(&str) -> bool:                  │
//! │                                                                         │
//! │    validate_name ──► validate_email ──► validate_card_number ──►       │
//! │    validate_expiration ──► validate_cvc ──► validate_zip               │
//! │                                                                         │
//! │  validate_card_fields runs ALL six in that fixed order and returns    │
//! │  one report row per field. No short-circuiting: a processor only      │
//! │  surfaces the first failure, but the full report is always available. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Patterns are compiled once into shared immutable statics. Every rule is
//! deterministic except `validate_expiration`, which reads the clock; its
//! `_at` form takes the clock as a parameter so tests stay deterministic.
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_card_number, validate_zip};
//!
//! assert!(validate_card_number("1234 1234 1234 1234"));
//! assert!(!validate_zip("9021"));
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::PaymentError;
use crate::types::{CardDetails, CardField, FieldValidation};
use crate::NAME_MAX_CHARS;

// =============================================================================
// Compiled Patterns
// =============================================================================
// One static per rule, compiled on first use and shared by every caller.

/// Lowercased `first [middle-initial-or-middle-name] last` built from
/// letters, apostrophes, and hyphens.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z'-]+\s(?:[a-z]\.?\s|[a-z'-]+\s)?[a-z'-]+$").expect("name pattern compiles")
});

/// `local@domain.tld` with the usual local-part characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email pattern compiles")
});

/// Exactly 16 digits (after spaces are stripped).
static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card number pattern compiles"));

/// Exactly 4 digits, MMYY.
static EXPIRATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("expiration pattern compiles"));

/// Exactly 3 digits.
static CVC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("cvc pattern compiles"));

/// Exactly 5 digits.
static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("zip pattern compiles"));

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the name on the card.
///
/// ## Rules (all must hold)
/// - Lowercased input matches `first [middle] last` built from letters,
///   apostrophes, and hyphens; the middle part may be a single initial with
///   an optional dot
/// - Contains no digit
/// - At most 26 characters
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_name;
///
/// assert!(validate_name("Jake Peralta"));
/// assert!(validate_name("Jake S. Peralta"));
/// assert!(!validate_name("Jake$ P. Peralta-Higgins"));
/// ```
pub fn validate_name(name: &str) -> bool {
    let lowered = name.to_lowercase();

    NAME_PATTERN.is_match(&lowered)
        && !lowered.chars().any(|c| c.is_ascii_digit())
        && lowered.chars().count() <= NAME_MAX_CHARS
}

/// Validates the billing email address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates the card number: exactly 16 digits once spaces are stripped.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_card_number;
///
/// assert!(validate_card_number("1234123412341234"));
/// assert!(validate_card_number("1234 1234 1234 1234"));
/// assert!(!validate_card_number("12341234"));
/// ```
pub fn validate_card_number(number: &str) -> bool {
    let stripped = number.replace(' ', "");
    CARD_NUMBER_PATTERN.is_match(&stripped)
}

/// Validates the expiration date against the current UTC moment.
///
/// Input is exactly four digits, MM then two-digit YY. The card stays valid
/// through its stated month: the first day of the FOLLOWING month must be
/// strictly in the future. A four-digit input whose month does not parse
/// into 1-12 fails.
///
/// The one time-dependent rule in the crate: the same input can flip from
/// valid to invalid as the clock advances.
pub fn validate_expiration(expiration: &str) -> bool {
    validate_expiration_at(expiration, Utc::now())
}

/// Clock-injected form of [`validate_expiration`].
pub fn validate_expiration_at(expiration: &str, now: DateTime<Utc>) -> bool {
    if !EXPIRATION_PATTERN.is_match(expiration) {
        return false;
    }

    let (month, year) = match (expiration[..2].parse::<u32>(), expiration[2..].parse::<i32>()) {
        (Ok(m), Ok(y)) => (m, 2000 + y),
        _ => return false,
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let (rollover_year, rollover_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match NaiveDate::from_ymd_opt(rollover_year, rollover_month, 1) {
        Some(rollover) => rollover > now.date_naive(),
        None => false,
    }
}

/// Validates the CVC: exactly 3 digits.
pub fn validate_cvc(cvc: &str) -> bool {
    CVC_PATTERN.is_match(cvc)
}

/// Validates the zip code: exactly 5 digits.
pub fn validate_zip(zip: &str) -> bool {
    ZIP_PATTERN.is_match(zip)
}

// =============================================================================
// Validation Aggregator
// =============================================================================

/// Runs all six field validators and returns the full report.
///
/// The report order is fixed: name, email, number, expiration, cvc, zip.
/// All six rows are always computed, even when an early field has already
/// failed, so a caller can report every failing field if it wants to. A
/// payment processor surfaces only the first failing row.
pub fn validate_card_fields(card: &CardDetails) -> Vec<FieldValidation> {
    vec![
        FieldValidation {
            field: CardField::Name,
            passed: validate_name(&card.name),
            error: PaymentError::InvalidNameOnCard,
        },
        FieldValidation {
            field: CardField::Email,
            passed: validate_email(&card.email),
            error: PaymentError::InvalidEmailAddress,
        },
        FieldValidation {
            field: CardField::Number,
            passed: validate_card_number(&card.number),
            error: PaymentError::InvalidCardNumber,
        },
        FieldValidation {
            field: CardField::Expiration,
            passed: validate_expiration(&card.expiration),
            error: PaymentError::InvalidExpirationDate,
        },
        FieldValidation {
            field: CardField::Cvc,
            passed: validate_cvc(&card.cvc),
            error: PaymentError::InvalidCvc,
        },
        FieldValidation {
            field: CardField::Zip,
            passed: validate_zip(&card.zip),
            error: PaymentError::InvalidZipCode,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // Mid-October 2024, noon UTC
        Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jake Peralta"));
        assert!(validate_name("jake peralta"));
        assert!(validate_name("Jake S. Peralta"));
        assert!(validate_name("Jake Samuel Peralta"));
        assert!(validate_name("jake peralta-higgins"));
        assert!(validate_name("rosa o'hara diaz"));

        // Disallowed character
        assert!(!validate_name("Jake$ P. Peralta-Higgins"));
        // Single word
        assert!(!validate_name("Jake"));
        // Digits
        assert!(!validate_name("J4ke Peralta"));
        // Empty
        assert!(!validate_name(""));
    }

    #[test]
    fn test_validate_name_length_limit() {
        // 26 characters total: still valid
        assert!(validate_name("jakeabcdefghijklmn peralta"));
        // 27 characters: rejected
        assert!(!validate_name("jakeabcdefghijklmno peralta"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jakeperalta@gmail.com"));
        assert!(validate_email("jake.peralta+work@mail-host.co.uk"));

        // Missing @
        assert!(!validate_email("jakeperalta&gmail.com"));
        // No dot in domain
        assert!(!validate_email("jake@gmail"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("1234123412341234"));
        assert!(validate_card_number("1234 1234 1234 1234"));

        assert!(!validate_card_number("123412341234123")); // 15 digits
        assert!(!validate_card_number("12341234123412345")); // 17 digits
        assert!(!validate_card_number("1234-1234-1234-1234")); // hyphens not stripped
        assert!(!validate_card_number("1234 1234 1234 123a"));
    }

    #[test]
    fn test_validate_expiration_future_and_past() {
        let now = fixed_now();

        // Card expired September 2024: rollover Oct 1 is not in the future
        assert!(!validate_expiration_at("0924", now));
        // Valid through October 2024: rollover Nov 1 is in the future
        assert!(validate_expiration_at("1024", now));
        // Far future
        assert!(validate_expiration_at("1230", now));
        // December rollover crosses the year boundary
        assert!(validate_expiration_at("1224", now));
    }

    #[test]
    fn test_validate_expiration_rejects_bad_months() {
        let now = fixed_now();

        // Digit pattern matches but the month does not parse as a date
        assert!(!validate_expiration_at("0026", now));
        assert!(!validate_expiration_at("1326", now));
    }

    #[test]
    fn test_validate_expiration_rejects_bad_format() {
        let now = fixed_now();

        assert!(!validate_expiration_at("924", now));
        assert!(!validate_expiration_at("09/24", now));
        assert!(!validate_expiration_at("09244", now));
        assert!(!validate_expiration_at("", now));
    }

    #[test]
    fn test_validate_cvc() {
        assert!(validate_cvc("345"));
        assert!(!validate_cvc("8098"));
        assert!(!validate_cvc("34"));
        assert!(!validate_cvc("34a"));
    }

    #[test]
    fn test_validate_zip() {
        assert!(validate_zip("90210"));
        assert!(!validate_zip("9021"));
        assert!(!validate_zip("902101"));
        assert!(!validate_zip("9021o"));
    }

    #[test]
    fn test_report_order_is_fixed() {
        let card = CardDetails::new(
            "Jake Peralta",
            "jakeperalta@gmail.com",
            "1234123412341234",
            "1299",
            "345",
            "90210",
        );

        let report = validate_card_fields(&card);
        let fields: Vec<CardField> = report.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                CardField::Name,
                CardField::Email,
                CardField::Number,
                CardField::Expiration,
                CardField::Cvc,
                CardField::Zip,
            ]
        );
        assert!(report.iter().all(|v| v.passed));
    }

    #[test]
    fn test_report_computes_every_row() {
        // Every field invalid: the report still has all six rows, each
        // failed with its own error kind
        let card = CardDetails::new("x", "y", "z", "0000", "1", "2");

        let report = validate_card_fields(&card);
        assert_eq!(report.len(), 6);
        assert!(report.iter().all(|v| !v.passed));
        assert_eq!(report[0].error, PaymentError::InvalidNameOnCard);
        assert_eq!(report[5].error, PaymentError::InvalidZipCode);
    }

    #[test]
    fn test_report_is_idempotent_for_unchanged_fields() {
        let card = CardDetails::new(
            "Jake Peralta",
            "jakeperalta&gmail.com", // broken on purpose
            "1234123412341234",
            "1299", // far enough out to be time-stable
            "345",
            "90210",
        );

        let first = validate_card_fields(&card);
        let second = validate_card_fields(&card);
        assert_eq!(first, second);
    }
}
