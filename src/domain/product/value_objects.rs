// src/domain/product/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

const MAX_NAME_LEN: usize = 255;
const MAX_SLUG_LEN: usize = 255;
const MAX_SKU_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(Uuid);

impl ProductId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse a product id from its textual form.
    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::validation("productId must be a valid UUID"))
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("sku cannot be blank"));
        }
        if trimmed.chars().count() > MAX_SKU_LEN {
            return Err(DomainError::validation(format!(
                "sku must be at most {MAX_SKU_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Accept `value` only if it is already in stored form, without trimming.
    pub fn exact(value: &str) -> Option<Self> {
        Self::new(value).ok().filter(|sku| sku.0 == value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe product handle: lowercase ascii letters, digits and dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductSlug(String);

impl ProductSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        let valid = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and dashes",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Money in minor currency units. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PriceCents(i64);

impl PriceCents {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation("price must be a positive integer"));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<PriceCents> for i64 {
    fn from(value: PriceCents) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StockQuantity(i64);

impl StockQuantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("stock quantity cannot be negative"));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn covers(self, requested: Quantity) -> bool {
        self.0 >= requested.value()
    }

    pub fn add(self, delta: Quantity) -> DomainResult<Self> {
        self.0
            .checked_add(delta.value())
            .map(Self)
            .ok_or_else(|| DomainError::validation("stock quantity overflow"))
    }
}

impl From<StockQuantity> for i64 {
    fn from(value: StockQuantity) -> Self {
        value.0
    }
}

impl fmt::Display for StockQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A strictly positive item count: a requested cart quantity or a restock delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
