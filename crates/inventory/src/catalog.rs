use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use storefront_core::{DomainError, DomainResult, Sku};

use crate::item::Item;

#[derive(Debug, Default)]
struct CatalogState {
    items: Vec<Arc<Item>>,
    by_sku: HashMap<Sku, usize>,
}

/// In-memory catalog: the owner of items that carts refer to.
///
/// Items are never removed, so handles stay valid for the catalog's lifetime.
#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item and return its shared handle.
    pub fn insert(&self, item: Item) -> DomainResult<Arc<Item>> {
        let mut state = self.state.write().map_err(|_| DomainError::LockPoisoned)?;

        if state.by_sku.contains_key(item.sku()) {
            return Err(DomainError::conflict(format!(
                "sku '{}' already in catalog",
                item.sku()
            )));
        }

        let handle = Arc::new(item);
        let idx = state.items.len();
        state.by_sku.insert(handle.sku().clone(), idx);
        state.items.push(Arc::clone(&handle));

        tracing::debug!(sku = %handle.sku(), "catalog item registered");
        Ok(handle)
    }

    pub fn get(&self, sku: &str) -> DomainResult<Option<Arc<Item>>> {
        let state = self.state.read().map_err(|_| DomainError::LockPoisoned)?;
        let Ok(sku) = Sku::new(sku) else {
            return Ok(None);
        };
        Ok(state.by_sku.get(&sku).map(|idx| Arc::clone(&state.items[*idx])))
    }

    /// All handles, in registration order.
    pub fn items(&self) -> DomainResult<Vec<Arc<Item>>> {
        let state = self.state.read().map_err(|_| DomainError::LockPoisoned)?;
        Ok(state.items.clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        let state = self.state.read().map_err(|_| DomainError::LockPoisoned)?;
        Ok(state.items.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Add `quantity` units to an item's stock; returns the new level.
    pub fn restock(&self, sku: &str, quantity: i64) -> DomainResult<i64> {
        if quantity <= 0 {
            return Err(DomainError::validation("restock quantity must be positive"));
        }
        let item = self.get(sku)?.ok_or_else(DomainError::not_found)?;
        let level = item.adjust_stock(quantity);

        tracing::info!(sku = %item.sku(), quantity, level, "item restocked");
        Ok(level)
    }
}
