//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a shopping cart.
///
/// Wraps a random 128-bit UUID. Two ids are equal iff their UUIDs are equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingCartId(Uuid);

impl ShoppingCartId {
    /// The all-zero sentinel. Never produced by [`ShoppingCartId::new`].
    pub const EMPTY: ShoppingCartId = ShoppingCartId(Uuid::nil());

    /// Create a new identifier from the OS random source (UUIDv4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ShoppingCartId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Display for ShoppingCartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ShoppingCartId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ShoppingCartId> for Uuid {
    fn from(value: ShoppingCartId) -> Self {
        value.0
    }
}

impl FromStr for ShoppingCartId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ShoppingCartId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Stock keeping unit: the catalog key of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Trims surrounding whitespace; blank SKUs are rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
