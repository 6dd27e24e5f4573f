//! Shopping cart domain module.
//!
//! A cart is a lock-guarded, ordered list of item handles. Every operation
//! runs under the cart's single guard, and stock bookkeeping on the items
//! happens inside that same critical section.

pub mod cart;
pub mod outcome;

pub use cart::ShoppingCart;
pub use outcome::{AddItemOutcome, CheckoutOutcome, DisplayOutcome, RemoveItemOutcome};
