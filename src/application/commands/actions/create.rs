// src/application/commands/actions/create.rs
use super::ActionCommandService;
use crate::{
    application::{dto::ActionLogDto, error::ApplicationResult},
    domain::action::{
        ActionId, ActionIntent, ActionStatus, ActorType, Channel, NewActionLog,
    },
};
use serde_json::Value;

/// Record an action proposed or taken outside the tool endpoints.
pub struct CreateActionCommand {
    pub actor_type: String,
    pub actor_id: Option<String>,
    pub channel: String,
    pub intent: String,
    pub prompt: Option<String>,
    pub tool_calls: Option<Value>,
    /// Defaults to `proposed`.
    pub status: Option<String>,
}

impl ActionCommandService {
    pub async fn create_action(&self, command: CreateActionCommand) -> ApplicationResult<ActionLogDto> {
        let actor_type: ActorType = command.actor_type.parse()?;
        let channel: Channel = command.channel.parse()?;
        let intent = ActionIntent::new(command.intent)?;
        let status = match command.status.as_deref() {
            Some(raw) => raw.parse()?,
            None => ActionStatus::Proposed,
        };

        let now = self.clock.now();
        let action = NewActionLog {
            id: ActionId::new(self.ids.next_id()),
            actor_type,
            actor_id: command.actor_id.filter(|id| !id.trim().is_empty()),
            channel,
            intent,
            prompt: command.prompt,
            tool_calls: command.tool_calls,
            status,
            created_at: now,
            executed_at: (status == ActionStatus::Executed).then_some(now),
        };

        let created = self.repo.insert(action).await?;
        tracing::info!(
            action_id = %created.id,
            intent = %created.intent,
            status = %created.status,
            "action recorded"
        );
        Ok(created.into())
    }
}
