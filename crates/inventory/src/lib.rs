//! Inventory domain module.
//!
//! Items and the catalog that owns them. Items are shared as `Arc<Item>`
//! handles; their stock counter is the only mutable field.

pub mod catalog;
pub mod item;

pub use catalog::Catalog;
pub use item::{Item, ItemView};
