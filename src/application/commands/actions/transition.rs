// src/application/commands/actions/transition.rs
use super::ActionCommandService;
use crate::{
    application::{
        dto::ActionLogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::action::{ActionId, ActionStatus},
};

pub struct TransitionActionCommand {
    pub id: String,
    pub status: String,
}

impl ActionCommandService {
    pub async fn transition_action(
        &self,
        command: TransitionActionCommand,
    ) -> ApplicationResult<ActionLogDto> {
        let id = ActionId::parse(&command.id)?;
        let next: ActionStatus = command.status.parse()?;

        let mut action = self
            .repo
            .find_with_changes(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("action not found"))?
            .action;

        let expected = action.status;
        action.transition(next, self.clock.now())?;

        let updated = self
            .repo
            .update_status(id, expected, action.status, action.executed_at)
            .await?;
        tracing::info!(action_id = %id, from = %expected, to = %updated.status, "action status changed");
        Ok(updated.into())
    }
}
