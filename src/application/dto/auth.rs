use serde::Serialize;

/// Identity attached to a request that passed admin authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPrincipal {
    pub subject: String,
}

impl AdminPrincipal {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
