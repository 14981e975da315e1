// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Collapse domain errors into the matching application variant.
    #[must_use]
    pub fn flatten(self) -> Self {
        match self {
            Self::Domain(DomainError::Validation(msg)) => Self::Validation(msg),
            Self::Domain(DomainError::NotFound(msg)) => Self::NotFound(msg),
            Self::Domain(DomainError::Conflict(msg)) => Self::Conflict(msg),
            Self::Domain(DomainError::Persistence(msg)) => Self::Infrastructure(msg),
            other => other,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }

    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Domain(DomainError::Validation(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_maps_domain_variants() {
        let err = ApplicationError::from(DomainError::not_found("product not found")).flatten();
        assert!(matches!(err, ApplicationError::NotFound(ref m) if m == "product not found"));

        let err = ApplicationError::from(DomainError::Persistence("boom".into())).flatten();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
