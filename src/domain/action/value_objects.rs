// src/domain/action/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(Uuid);

impl ActionId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::validation("action id must be a valid UUID"))
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ActionId> for Uuid {
    fn from(value: ActionId) -> Self {
        value.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionChangeId(Uuid);

impl ActionChangeId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ActionChangeId> for Uuid {
    fn from(value: ActionChangeId) -> Self {
        value.0
    }
}

macro_rules! text_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(DomainError::Validation(format!(
                        concat!("unknown ", $label, ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

text_enum!(ActorType, "actor type", {
    Human => "human",
    Ai => "ai",
});

text_enum!(Channel, "channel", {
    Web => "web",
    Telegram => "telegram",
    Slack => "slack",
});

text_enum!(ActionStatus, "action status", {
    Proposed => "proposed",
    Confirmed => "confirmed",
    Executed => "executed",
    Failed => "failed",
});

text_enum!(EntityType, "entity type", {
    Product => "product",
    Order => "order",
});

impl ActionStatus {
    /// `proposed -> confirmed -> executed | failed`; a proposal may also fail
    /// before confirmation.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Proposed, Self::Confirmed)
                | (Self::Proposed, Self::Failed)
                | (Self::Confirmed, Self::Executed)
                | (Self::Confirmed, Self::Failed)
        )
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Executed | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIntent(String);

impl ActionIntent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("intent cannot be empty"));
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

impl fmt::Display for ActionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions_follow_the_lifecycle() {
        use ActionStatus::*;

        assert!(Proposed.can_transition_to(Confirmed));
        assert!(Proposed.can_transition_to(Failed));
        assert!(Confirmed.can_transition_to(Executed));
        assert!(Confirmed.can_transition_to(Failed));

        assert!(!Proposed.can_transition_to(Executed));
        assert!(!Confirmed.can_transition_to(Proposed));
        assert!(!Executed.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Confirmed));
        assert!(!Proposed.can_transition_to(Proposed));
    }

    #[test]
    fn text_enums_round_trip_through_strings() {
        assert_eq!("ai".parse::<ActorType>().unwrap(), ActorType::Ai);
        assert_eq!("slack".parse::<Channel>().unwrap(), Channel::Slack);
        assert_eq!(ActionStatus::Executed.as_str(), "executed");
        assert!("email".parse::<Channel>().is_err());
    }

    #[test]
    fn intent_must_not_be_blank() {
        assert!(ActionIntent::new("restock").is_ok());
        assert!(ActionIntent::new("  ").is_err());
    }
}
