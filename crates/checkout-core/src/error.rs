//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PaymentError  - Closed classification of payment attempt failures     │
//! │                  (funds, counterfeit bills, six card field kinds,      │
//! │                   unknown fallback)                                     │
//! │                                                                         │
//! │  CartError     - Cart operation failures (size limits, membership)     │
//! │                                                                         │
//! │  Flow: validators → aggregator → processor → Err(PaymentError)         │
//! │        caller maps the kind to user-facing text (messages module)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Payment Error
// =============================================================================

/// Classification of a failed payment attempt.
///
/// A closed set: every failed `process_payment` call surfaces exactly one of
/// these. Variants carry no payload, so the type is `Copy` and can be
/// attached to each row of a validation report without cloning.
///
/// The shortfall shown to cash customers is computed by the caller from
/// (amount, purchase price), not stored here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentError {
    /// The tendered amount does not cover the purchase price.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Cash only: the tendered bills failed the counterfeit check.
    #[error("bills are counterfeit")]
    CounterfeitBills,

    /// Name on card failed validation.
    #[error("invalid name on card")]
    InvalidNameOnCard,

    /// Email address failed validation.
    #[error("invalid email address")]
    InvalidEmailAddress,

    /// Card number failed validation.
    #[error("invalid credit card number")]
    InvalidCardNumber,

    /// Expiration date failed validation (format or already expired).
    #[error("invalid expiration date")]
    InvalidExpirationDate,

    /// CVC failed validation.
    #[error("invalid CVC")]
    InvalidCvc,

    /// Zip code failed validation.
    #[error("invalid zip code")]
    InvalidZipCode,

    /// Fallback classification for anything the caller does not map.
    #[error("unknown payment error")]
    Unknown,
}

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation failures.
///
/// These carry context (the limit that was hit, the missing product) so a
/// host application can render a precise message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Line quantity would exceed the per-item maximum.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart already holds the maximum number of unique items.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// The product is not in the cart.
    #[error("product {product_id} not in cart")]
    NotInCart { product_id: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
