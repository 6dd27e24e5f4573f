use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize, Serializer};

use storefront_core::{DomainError, DomainResult, Entity, Money, Sku};

/// A sellable item with a stock counter.
///
/// Items are owned by a [`crate::Catalog`] and shared by handle. Membership in
/// a cart is by handle identity (see [`Item::same`]), so two items with equal
/// fields are still distinct.
///
/// The stock counter is atomic so it can be changed through a shared handle.
/// Plain writes are not coordinated with any cart; [`Item::take_one`] is the
/// only conditional update.
#[derive(Debug)]
pub struct Item {
    sku: Sku,
    name: String,
    price: Money,
    quantity_in_stock: AtomicI64,
}

impl Item {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        quantity_in_stock: i64,
    ) -> DomainResult<Self> {
        let sku = Sku::new(sku)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            sku,
            name,
            price,
            quantity_in_stock: AtomicI64::new(quantity_in_stock),
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock.load(Ordering::SeqCst)
    }

    pub fn set_quantity_in_stock(&self, quantity: i64) {
        self.quantity_in_stock.store(quantity, Ordering::SeqCst);
    }

    /// Add `delta` (possibly negative) to the stock; returns the new level.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn adjust_stock(&self, delta: i64) -> i64 {
        let previous = self
            .quantity_in_stock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |q| Some(q.saturating_add(delta)))
            .unwrap_or_else(|current| current);
        previous.saturating_add(delta)
    }

    /// Take one unit if at least one is in stock; returns the new level.
    ///
    /// The check and the decrement are a single atomic step, so concurrent
    /// takers can never drive the counter below zero between them.
    pub fn take_one(&self) -> Option<i64> {
        self.quantity_in_stock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |q| (q >= 1).then(|| q - 1))
            .ok()
            .map(|previous| previous - 1)
    }

    /// Return one unit to stock; returns the new level.
    pub fn put_back_one(&self) -> i64 {
        self.adjust_stock(1)
    }

    /// Whether two handles point at the same item.
    pub fn same(a: &Arc<Item>, b: &Arc<Item>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Point-in-time plain copy, suitable for serialization.
    pub fn view(&self) -> ItemView {
        ItemView {
            sku: self.sku.clone(),
            name: self.name.clone(),
            price: self.price,
            quantity_in_stock: self.quantity_in_stock(),
        }
    }
}

impl Entity for Item {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} [{}] @ {} ({} in stock)",
            self.name,
            self.sku,
            self.price,
            self.quantity_in_stock()
        )
    }
}

/// Serializes as its [`ItemView`], reading the stock once.
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

/// Serializable snapshot of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub sku: Sku,
    pub name: String,
    pub price: Money,
    pub quantity_in_stock: i64,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        item.view()
    }
}
