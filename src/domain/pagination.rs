// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub const MAX_PAGE_SIZE: u32 = 100;
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub fn new(page: Option<u32>, page_size: Option<u32>) -> DomainResult<Self> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE);
        if page == 0 {
            return Err(DomainError::validation("page must be a positive integer"));
        }
        if page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(DomainError::validation(format!(
                "pageSize must be between 1 and {}",
                Self::MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, page_size })
    }

    pub fn offset(self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(self) -> i64 {
        i64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_bounds() {
        assert_eq!(PageRequest::new(None, None).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(Some(3), Some(10)).unwrap().offset(), 20);
        assert!(PageRequest::new(Some(0), None).is_err());
        assert!(PageRequest::new(None, Some(101)).is_err());
    }
}
