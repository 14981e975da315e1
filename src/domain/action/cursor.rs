use crate::domain::action::value_objects::ActionId;
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position in the newest-first action listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogCursor {
    pub created_at: DateTime<Utc>,
    pub id: ActionId,
}

impl ActionLogCursor {
    pub const fn new(created_at: DateTime<Utc>, id: ActionId) -> Self {
        Self { created_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation("invalid cursor token");

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = ActionId::parse(id_s).map_err(|_| invalid())?;
        Ok(Self::new(created_at, id))
    }
}
