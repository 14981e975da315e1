use crate::domain::action::{ActionChange, ActionLog, ActionWithChanges};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogDto {
    pub id: Uuid,
    pub actor_type: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    pub channel: String,
    pub intent: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub tool_calls: Option<Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
}

impl From<ActionLog> for ActionLogDto {
    fn from(action: ActionLog) -> Self {
        Self {
            id: action.id.into(),
            actor_type: action.actor_type.as_str().to_string(),
            actor_id: action.actor_id,
            channel: action.channel.as_str().to_string(),
            intent: action.intent.into_inner(),
            prompt: action.prompt,
            tool_calls: action.tool_calls,
            status: action.status.as_str().to_string(),
            created_at: action.created_at,
            executed_at: action.executed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionChangeDto {
    pub id: Uuid,
    pub action_id: Uuid,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub before_json: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub after_json: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<ActionChange> for ActionChangeDto {
    fn from(change: ActionChange) -> Self {
        Self {
            id: change.id.into(),
            action_id: change.action_id.into(),
            entity_type: change.entity_type.as_str().to_string(),
            entity_id: change.entity_id,
            before_json: change.before,
            after_json: change.after,
            created_at: change.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionDetailDto {
    #[serde(flatten)]
    pub action: ActionLogDto,
    pub changes: Vec<ActionChangeDto>,
}

impl From<ActionWithChanges> for ActionDetailDto {
    fn from(value: ActionWithChanges) -> Self {
        Self {
            action: value.action.into(),
            changes: value.changes.into_iter().map(Into::into).collect(),
        }
    }
}
