// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminPrincipal};

/// Verifies the bearer credential presented on admin and tool routes.
pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal>;
}
