use std::sync::{Arc, Mutex, MutexGuard};

use storefront_core::{DomainError, DomainResult, Entity, Money, ShoppingCartId};
use storefront_inventory::Item;

use crate::outcome::{AddItemOutcome, CheckoutOutcome, DisplayOutcome, RemoveItemOutcome};

/// A shopping cart shared between threads.
///
/// - One `Mutex` guards the item list; every operation holds it for its whole
///   duration, so operations on one cart are totally ordered.
/// - Stock changes on items happen inside the same critical section as the
///   list change they belong to.
/// - Membership is by handle identity (`Arc::ptr_eq`), not by item value.
///
/// The guard is not reentrant: no method calls another locking method while
/// holding it.
#[derive(Debug)]
pub struct ShoppingCart {
    id: ShoppingCartId,
    items: Mutex<Vec<Arc<Item>>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::with_id(ShoppingCartId::new())
    }

    /// Create an empty cart under a caller-chosen id (useful in tests).
    pub fn with_id(id: ShoppingCartId) -> Self {
        Self {
            id,
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> ShoppingCartId {
        self.id
    }

    fn guard(&self) -> DomainResult<MutexGuard<'_, Vec<Arc<Item>>>> {
        self.items.lock().map_err(|_| DomainError::LockPoisoned)
    }

    // Callers must already hold the guard.
    fn sum_prices(items: &[Arc<Item>]) -> DomainResult<Money> {
        Money::checked_sum(items.iter().map(|item| item.price()))
    }

    fn require(item: Option<&Arc<Item>>) -> DomainResult<&Arc<Item>> {
        item.ok_or_else(|| DomainError::invalid_argument("item cannot be absent"))
    }

    /// Snapshot of the current items, in insertion order.
    pub fn items(&self) -> DomainResult<Vec<Arc<Item>>> {
        Ok(self.guard()?.clone())
    }

    pub fn total_price(&self) -> DomainResult<Money> {
        let items = self.guard()?;
        Self::sum_prices(&items)
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.guard()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.guard()?.is_empty())
    }

    /// How many times this exact handle is in the cart.
    pub fn count_of(&self, item: &Arc<Item>) -> DomainResult<usize> {
        let items = self.guard()?;
        Ok(items.iter().filter(|held| Item::same(held, item)).count())
    }

    /// Append `item` and take one unit of its stock.
    ///
    /// An item with no stock left is reported as [`AddItemOutcome::OutOfStock`]
    /// and nothing changes. `None` is rejected with `InvalidArgument`.
    pub fn add_item(&self, item: Option<&Arc<Item>>) -> DomainResult<AddItemOutcome> {
        let item = Self::require(item)?;
        let mut items = self.guard()?;

        let Some(remaining_stock) = item.take_one() else {
            tracing::info!(cart_id = %self.id, sku = %item.sku(), "item out of stock");
            return Ok(AddItemOutcome::OutOfStock);
        };
        items.push(Arc::clone(item));

        tracing::debug!(
            cart_id = %self.id,
            sku = %item.sku(),
            remaining_stock,
            "item added to cart"
        );
        Ok(AddItemOutcome::Added { remaining_stock })
    }

    /// Remove the first occurrence of this exact handle and return its unit
    /// to stock.
    ///
    /// An equal-valued but distinct item does not match. A handle that is not
    /// in the cart is reported as [`RemoveItemOutcome::NotFound`].
    pub fn remove_item(&self, item: Option<&Arc<Item>>) -> DomainResult<RemoveItemOutcome> {
        let item = Self::require(item)?;
        let mut items = self.guard()?;

        let Some(pos) = items.iter().position(|held| Item::same(held, item)) else {
            tracing::info!(cart_id = %self.id, sku = %item.sku(), "item not found in cart");
            return Ok(RemoveItemOutcome::NotFound);
        };
        items.remove(pos);
        let remaining_stock = item.put_back_one();

        tracing::debug!(
            cart_id = %self.id,
            sku = %item.sku(),
            remaining_stock,
            "item removed from cart"
        );
        Ok(RemoveItemOutcome::Removed { remaining_stock })
    }

    /// Purchase everything in the cart and empty it.
    ///
    /// Stock is not restored: the units taken on add are consumed. A total that
    /// overflows is a validation error and leaves the cart untouched.
    pub fn checkout(&self) -> DomainResult<CheckoutOutcome> {
        let mut items = self.guard()?;

        if items.is_empty() {
            tracing::info!(cart_id = %self.id, "checkout of empty cart");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let total = Self::sum_prices(&items)?;
        let item_count = items.len();
        items.clear();

        tracing::info!(cart_id = %self.id, item_count, %total, "purchase completed");
        Ok(CheckoutOutcome::PurchaseCompleted {
            cart_id: self.id,
            item_count,
            total,
        })
    }

    /// Current contents for a presentation layer.
    pub fn display_cart_items(&self) -> DomainResult<DisplayOutcome> {
        let items = self.guard()?;
        if items.is_empty() {
            return Ok(DisplayOutcome::Empty);
        }
        Ok(DisplayOutcome::Items {
            items: items.clone(),
        })
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for ShoppingCart {
    type Id = ShoppingCartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
