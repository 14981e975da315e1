use crate::domain::action::cursor::ActionLogCursor;
use crate::domain::action::entity::{ActionLog, ActionWithChanges, NewActionLog};
use crate::domain::action::value_objects::{ActionId, ActionStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    async fn insert(&self, action: NewActionLog) -> DomainResult<ActionLog>;

    async fn find_with_changes(&self, id: ActionId) -> DomainResult<Option<ActionWithChanges>>;

    /// Persist a status change made by `ActionLog::transition`. Fails with
    /// `Conflict` if the stored status is no longer `expected`.
    async fn update_status(
        &self,
        id: ActionId,
        expected: ActionStatus,
        next: ActionStatus,
        executed_at: Option<DateTime<Utc>>,
    ) -> DomainResult<ActionLog>;

    async fn list(
        &self,
        limit: u32,
        cursor: Option<ActionLogCursor>,
    ) -> DomainResult<(Vec<ActionLog>, Option<ActionLogCursor>)>;
}
