// src/infrastructure/security.rs
use crate::application::{
    dto::AdminPrincipal,
    error::{ApplicationError, ApplicationResult},
    ports::security::AdminAuthenticator,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const MAC_KEY: &[u8] = b"storefront-core/admin-token";
const ADMIN_SUBJECT: &str = "admin";

/// Static bearer token check for admin and tool routes.
///
/// Tokens are compared through their HMAC-SHA256 digests with a constant-time
/// check.
#[derive(Clone)]
pub struct HmacAdminAuthenticator {
    expected: Vec<u8>,
}

impl HmacAdminAuthenticator {
    pub fn new(admin_token: &str) -> ApplicationResult<Self> {
        if admin_token.trim().is_empty() {
            return Err(ApplicationError::infrastructure("admin token must not be empty"));
        }
        let expected = digest(admin_token)?.finalize().into_bytes().to_vec();
        Ok(Self { expected })
    }
}

fn digest(token: &str) -> ApplicationResult<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(MAC_KEY)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    mac.update(token.as_bytes());
    Ok(mac)
}

impl AdminAuthenticator for HmacAdminAuthenticator {
    fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        digest(token)?
            .verify_slice(&self.expected)
            .map_err(|_| ApplicationError::unauthorized("invalid admin token"))?;
        Ok(AdminPrincipal::new(ADMIN_SUBJECT))
    }
}
