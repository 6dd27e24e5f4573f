//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attributes are
/// interchangeable. [`crate::Money`] and [`crate::ShoppingCartId`] are value
/// objects; a cart or a catalog item is not.
///
/// ```ignore
/// let a = Money::new(dec!(10.00))?;
/// let b = Money::new(dec!(10.0))?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::Money {}
impl ValueObject for crate::ShoppingCartId {}
impl ValueObject for crate::Sku {}
