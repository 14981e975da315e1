// src/domain/product/image.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::value_objects::ProductId;
use chrono::{DateTime, Utc};
use std::fmt;
use url::Url;
use uuid::Uuid;

const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductImageId(Uuid);

impl ProductImageId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ProductImageId> for Uuid {
    fn from(value: ProductImageId) -> Self {
        value.0
    }
}

/// Absolute `http`/`https` location of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("url cannot be blank"));
        }
        if trimmed.len() > MAX_URL_LEN {
            return Err(DomainError::validation(format!(
                "url must be at most {MAX_URL_LEN} characters"
            )));
        }
        let parsed =
            Url::parse(trimmed).map_err(|_| DomainError::validation("url must be a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DomainError::validation("url must be an http or https URL"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SortOrder(i32);

impl SortOrder {
    pub fn new(value: i64) -> DomainResult<Self> {
        i32::try_from(value)
            .ok()
            .filter(|v| *v >= 0)
            .map(Self)
            .ok_or_else(|| DomainError::validation("sortOrder must be a non-negative integer"))
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub url: ImageUrl,
    pub sort_order: SortOrder,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub url: ImageUrl,
    pub sort_order: SortOrder,
    pub created_at: DateTime<Utc>,
}

impl From<NewProductImage> for ProductImage {
    fn from(image: NewProductImage) -> Self {
        Self {
            id: image.id,
            product_id: image.product_id,
            url: image.url,
            sort_order: image.sort_order,
            created_at: image.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_must_be_absolute_http() {
        assert_eq!(
            ImageUrl::new(" https://cdn.example.com/mug.jpg ").unwrap().as_str(),
            "https://cdn.example.com/mug.jpg"
        );
        assert!(ImageUrl::new("http://localhost:9000/a.png").is_ok());
        assert!(ImageUrl::new("").is_err());
        assert!(ImageUrl::new("not a url").is_err());
        assert!(ImageUrl::new("/relative/path.png").is_err());
        assert!(ImageUrl::new("ftp://files.example.com/a.png").is_err());
        assert!(ImageUrl::new("data:image/png;base64,AAAA").is_err());
    }

    #[test]
    fn sort_order_is_non_negative_i32() {
        assert_eq!(SortOrder::new(0).unwrap().value(), 0);
        assert_eq!(SortOrder::new(7).unwrap().value(), 7);
        assert!(SortOrder::new(-1).is_err());
        assert!(SortOrder::new(i64::from(i32::MAX) + 1).is_err());
    }
}
