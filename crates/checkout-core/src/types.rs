//! # Domain Types
//!
//! Core domain types used throughout checkout-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CardDetails    │   │ FieldValidation │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  field          │   │  id (UUID)      │       │
//! │  │  email          │   │  passed         │   │  name           │       │
//! │  │  number         │   │  error          │   │  unit_price     │       │
//! │  │  expiration     │   └─────────────────┘   └─────────────────┘       │
//! │  │  cvc, zip       │                                                   │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │  PaymentMethod  │   │    CardField    │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  Cash           │   │  Name, Email,   │       │
//! │                        │  CreditCard     │   │  Number, ...    │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PaymentError;
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// The two supported ways to pay.
///
/// A closed set: the caller-side message table matches on this to pick the
/// right wording for each failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Credit card payment validated field by field.
    CreditCard,
}

// =============================================================================
// Card Fields
// =============================================================================

/// The six validated card fields, in their fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Name,
    Email,
    Number,
    Expiration,
    Cvc,
    Zip,
}

/// One row of a card validation report.
///
/// Produced fresh on every validation pass, never stored. `error` is the
/// classification a processor surfaces when this row is the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Which field was checked.
    pub field: CardField,
    /// Whether the field passed its rule.
    pub passed: bool,
    /// The error kind reported if this field fails.
    pub error: PaymentError,
}

// =============================================================================
// Card Details
// =============================================================================

/// Raw card input as entered by the customer.
///
/// Caller-owned and mutable: correcting a field between payment attempts
/// changes the outcome of the next attempt only. Nothing here is validated
/// at construction; validation happens on every `process_payment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Name on card.
    pub name: String,
    /// Billing email address.
    pub email: String,
    /// Card number, spaces allowed.
    pub number: String,
    /// Expiration as exactly four digits, MM then two-digit YY.
    pub expiration: String,
    /// Card verification code, three digits.
    pub cvc: String,
    /// Billing zip code, five digits.
    pub zip: String,
}

impl CardDetails {
    /// Creates card details from raw field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        number: impl Into<String>,
        expiration: impl Into<String>,
        cvc: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        CardDetails {
            name: name.into(),
            email: email.into(),
            number: number.into(),
            expiration: expiration.into(),
            cvc: cvc.into(),
            zip: zip.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Undiscounted unit price.
    pub unit_price: Money,
}

impl Product {
    /// Creates a product with a fresh identifier.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
