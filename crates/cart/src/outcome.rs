//! Outcome values returned by cart operations.
//!
//! These cover the expected business conditions (out of stock, not in cart,
//! empty cart). Hard failures are `DomainError`s instead.

use std::sync::Arc;

use serde::Serialize;

use storefront_core::{Money, ShoppingCartId};
use storefront_inventory::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddItemOutcome {
    /// Item appended; stock after the decrement.
    Added { remaining_stock: i64 },
    /// Nothing changed.
    OutOfStock,
}

impl AddItemOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddItemOutcome::Added { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemoveItemOutcome {
    /// One occurrence removed; stock after the increment.
    Removed { remaining_stock: i64 },
    /// The handle is not in the cart. Nothing changed.
    NotFound,
}

impl RemoveItemOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveItemOutcome::Removed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    EmptyCart,
    PurchaseCompleted {
        cart_id: ShoppingCartId,
        item_count: usize,
        total: Money,
    },
}

impl CheckoutOutcome {
    /// Total charged, if the purchase went through.
    pub fn total(&self) -> Option<Money> {
        match self {
            CheckoutOutcome::EmptyCart => None,
            CheckoutOutcome::PurchaseCompleted { total, .. } => Some(*total),
        }
    }
}

/// Cart contents handed to a presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DisplayOutcome {
    Empty,
    /// Items in insertion order.
    Items { items: Vec<Arc<Item>> },
}

impl DisplayOutcome {
    pub fn items(&self) -> &[Arc<Item>] {
        match self {
            DisplayOutcome::Empty => &[],
            DisplayOutcome::Items { items } => items,
        }
    }
}
