// src/domain/action/entity.rs
use crate::domain::action::value_objects::{
    ActionChangeId, ActionId, ActionIntent, ActionStatus, ActorType, Channel, EntityType,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    pub id: ActionId,
    pub actor_type: ActorType,
    pub actor_id: Option<String>,
    pub channel: Channel,
    pub intent: ActionIntent,
    pub prompt: Option<String>,
    pub tool_calls: Option<Value>,
    pub status: ActionStatus,
    pub created_at: DateTime<Utc>,
    pub executed_at: Option<DateTime<Utc>>,
}

impl ActionLog {
    /// Move the action to `next`, stamping `executed_at` when it executes.
    pub fn transition(&mut self, next: ActionStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::conflict(format!(
                "cannot move action from {} to {}",
                self.status, next
            )));
        }
        self.status = next;
        if next == ActionStatus::Executed {
            self.executed_at = Some(now);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewActionLog {
    pub id: ActionId,
    pub actor_type: ActorType,
    pub actor_id: Option<String>,
    pub channel: Channel,
    pub intent: ActionIntent,
    pub prompt: Option<String>,
    pub tool_calls: Option<Value>,
    pub status: ActionStatus,
    pub created_at: DateTime<Utc>,
    pub executed_at: Option<DateTime<Utc>>,
}

impl NewActionLog {
    /// An agent tool call that already ran: created and executed at `at`.
    pub fn executed_tool_call(id: ActionId, intent: ActionIntent, at: DateTime<Utc>) -> Self {
        Self {
            id,
            actor_type: ActorType::Ai,
            actor_id: None,
            channel: Channel::Web,
            intent,
            prompt: None,
            tool_calls: None,
            status: ActionStatus::Executed,
            created_at: at,
            executed_at: Some(at),
        }
    }
}

impl From<NewActionLog> for ActionLog {
    fn from(value: NewActionLog) -> Self {
        Self {
            id: value.id,
            actor_type: value.actor_type,
            actor_id: value.actor_id,
            channel: value.channel,
            intent: value.intent,
            prompt: value.prompt,
            tool_calls: value.tool_calls,
            status: value.status,
            created_at: value.created_at,
            executed_at: value.executed_at,
        }
    }
}

/// Field-level before/after snapshot of one mutated entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionChange {
    pub id: ActionChangeId,
    pub action_id: ActionId,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub before: Option<Value>,
    pub after: Option<Value>,
    pub created_at: DateTime<Utc>,
}

pub type NewActionChange = ActionChange;

/// An action together with every change recorded under it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionWithChanges {
    pub action: ActionLog,
    pub changes: Vec<ActionChange>,
}
