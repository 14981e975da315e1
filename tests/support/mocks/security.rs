// tests/support/mocks/security.rs
use storefront_core::application::{
    ApplicationResult, dto::AdminPrincipal, error::ApplicationError,
    ports::security::AdminAuthenticator,
};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Clone, Debug, Default)]
pub struct StaticTokenAuthenticator;

impl AdminAuthenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        if token == TEST_TOKEN {
            Ok(AdminPrincipal::new("test-admin"))
        } else {
            Err(ApplicationError::unauthorized("invalid admin token"))
        }
    }
}
