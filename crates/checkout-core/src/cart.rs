//! # Shopping Cart
//!
//! An in-memory cart with per-add discount pricing.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Caller Action             Cart Change                                  │
//! │  ─────────────             ───────────                                  │
//! │  add_item(p, qty, disc) ─► price discounted + frozen, line added       │
//! │                            (same product: quantity merged)              │
//! │  remove_one(id) ─────────► quantity - 1, line dropped at zero          │
//! │  remove_item(id) ────────► whole line dropped                          │
//! │  clear() ────────────────► empty cart                                  │
//! │  total() ────────────────► Σ frozen unit price × quantity              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount strategy is applied once, when the item is added; the
//! discounted price is frozen on the line. Re-adding the same product
//! merges quantity and keeps the original frozen price.
//!
//! The cart is a plain caller-owned value: single-threaded, no interior
//! mutability, no global instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CartError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Discount Strategy
// =============================================================================

/// Pricing strategy applied when an item enters the cart.
///
/// A closed set of two variants, matching the two supported checkout
/// promotions. Percentage discounts are expressed in basis points
/// (2000 = 20% off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Charge the listed price.
    NoDiscount,
    /// Subtract `bps`/10000 of the listed price, rounded to the cent.
    Percentage { bps: u32 },
}

impl DiscountPolicy {
    /// Applies this strategy to a unit price.
    pub fn apply(&self, price: Money) -> Money {
        match self {
            DiscountPolicy::NoDiscount => price,
            DiscountPolicy::Percentage { bps } => price.apply_percentage_discount(*bps),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// Uses the snapshot pattern: the name and (discounted) unit price are
/// frozen at add time, so later product edits never change what the
/// customer was quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: Uuid,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding, discount already applied (frozen).
    pub unit_price: Money,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Line total: frozen unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges
///   quantity)
/// - Quantity is always > 0 (a decrement to zero drops the line)
/// - At most [`MAX_CART_ITEMS`] unique lines, [`MAX_ITEM_QUANTITY`] per line
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cart {
    /// Lines in the cart.
    pub items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product, applying the discount strategy to the unit price.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases; the frozen price is
    ///   kept and the discount argument is ignored
    /// - Otherwise: a new line is added with the discounted price frozen
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        discount: DiscountPolicy,
    ) -> Result<(), CartError> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: discount.apply(product.unit_price),
            quantity,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes one unit of a product, dropping the line at quantity zero.
    pub fn remove_one(&mut self, product_id: Uuid) -> Result<(), CartError> {
        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            return Err(CartError::NotInCart {
                product_id: product_id.to_string(),
            });
        };

        self.items[index].quantity -= 1;
        if self.items[index].quantity == 0 {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Removes a product's whole line regardless of quantity.
    pub fn remove_item(&mut self, product_id: Uuid) -> Result<(), CartError> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CartError::NotInCart {
                product_id: product_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total: sum of frozen line totals.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
