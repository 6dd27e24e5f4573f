//! Entity trait: objects tracked by identity rather than by value.

/// A domain object whose identity outlives changes to its state.
///
/// A cart keeps its id while its contents change; a catalog item keeps its
/// SKU while its stock moves.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` carries the same identifier, regardless of state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
