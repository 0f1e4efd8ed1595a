//! # checkout-core: Pure Business Logic for the Checkout Flow
//!
//! This crate is the **heart** of the checkout flow. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host Application (not here)                    │   │
//! │  │     register UI, API server, terminal shell, ...               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ validation│  │  payment  │  │   cart    │  │   │
//! │  │   │   Money   │  │  6 rules  │  │  Cash /   │  │ Discount  │  │   │
//! │  │   │  $X.YY    │  │  report   │  │  Card     │  │ pricing   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`types`] - Domain types (CardDetails, PaymentMethod, Product, ...)
//! - [`validation`] - The six card field rules and the aggregated report
//! - [`payment`] - Cash and credit card payment strategies
//! - [`messages`] - Caller-side failure-to-text mapping
//! - [`cart`] - Shopping cart with per-add discount pricing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output (the expiration rule is
//!    the one exception; it reads the clock, and tests inject it)
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all failures are typed enum variants, never
//!    strings or panics
//! 5. **Caller-Owned State**: card details, the counterfeit flag, and the
//!    cart are plain mutable values owned by the caller; nothing global
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::money::Money;
//! use checkout_core::payment::{CashProcessor, PaymentProcessor};
//!
//! let drawer = CashProcessor::new();
//! let amount = Money::from_cents(2050); // $20.50
//!
//! assert!(drawer.process_payment(amount, amount).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod messages;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use cart::{Cart, CartItem, DiscountPolicy};
pub use error::{CartError, PaymentError};
pub use messages::failure_message;
pub use money::Money;
pub use payment::{CashProcessor, CreditCardProcessor, PaymentProcessor};
pub use types::{CardDetails, CardField, FieldValidation, PaymentMethod, Product};
pub use validation::validate_card_fields;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of the name on a card, in characters.
pub const NAME_MAX_CHARS: usize = 26;

/// Maximum unique lines allowed in a single cart.
///
/// Prevents runaway carts and keeps transactions a reasonable size.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Catches accidental over-ordering (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
