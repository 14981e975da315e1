// src/infrastructure/repositories/postgres_action_log.rs
use super::map_sqlx;
use crate::domain::action::{
    ActionChange, ActionChangeId, ActionId, ActionIntent, ActionLog, ActionLogCursor,
    ActionLogRepository, ActionStatus, ActionWithChanges, NewActionChange, NewActionLog,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const ACTION_COLUMNS: &str =
    "id, actor_type, actor_id, channel, intent, prompt, tool_calls, status, created_at, executed_at";
const CHANGE_COLUMNS: &str = "id, action_id, entity_type, entity_id, before_json, after_json, created_at";

#[derive(Clone)]
pub struct PostgresActionLogRepository {
    pool: PgPool,
}

impl PostgresActionLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActionLogRow {
    id: Uuid,
    actor_type: String,
    actor_id: Option<String>,
    channel: String,
    intent: String,
    prompt: Option<String>,
    tool_calls: Option<Value>,
    status: String,
    created_at: DateTime<Utc>,
    executed_at: Option<DateTime<Utc>>,
}

impl TryFrom<ActionLogRow> for ActionLog {
    type Error = DomainError;

    fn try_from(row: ActionLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionId::new(row.id),
            actor_type: row.actor_type.parse()?,
            actor_id: row.actor_id,
            channel: row.channel.parse()?,
            intent: ActionIntent::new(row.intent)?,
            prompt: row.prompt,
            tool_calls: row.tool_calls,
            status: row.status.parse()?,
            created_at: row.created_at,
            executed_at: row.executed_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ActionChangeRow {
    id: Uuid,
    action_id: Uuid,
    entity_type: String,
    entity_id: String,
    before_json: Option<Value>,
    after_json: Option<Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActionChangeRow> for ActionChange {
    type Error = DomainError;

    fn try_from(row: ActionChangeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActionChangeId::new(row.id),
            action_id: ActionId::new(row.action_id),
            entity_type: row.entity_type.parse()?,
            entity_id: row.entity_id,
            before: row.before_json,
            after: row.after_json,
            created_at: row.created_at,
        })
    }
}

/// Insert an action on an existing connection so callers can share a
/// transaction with the write being audited.
pub(super) async fn insert_action(
    conn: &mut PgConnection,
    action: &NewActionLog,
) -> DomainResult<ActionLog> {
    let row = sqlx::query_as::<_, ActionLogRow>(&format!(
        "INSERT INTO action_log (id, actor_type, actor_id, channel, intent, prompt, tool_calls,
                                 status, created_at, executed_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING {ACTION_COLUMNS}"
    ))
    .bind(action.id.as_uuid())
    .bind(action.actor_type.as_str())
    .bind(action.actor_id.as_deref())
    .bind(action.channel.as_str())
    .bind(action.intent.as_str())
    .bind(action.prompt.as_deref())
    .bind(action.tool_calls.clone())
    .bind(action.status.as_str())
    .bind(action.created_at)
    .bind(action.executed_at)
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)?;

    ActionLog::try_from(row)
}

pub(super) async fn insert_change(
    conn: &mut PgConnection,
    change: &NewActionChange,
) -> DomainResult<()> {
    sqlx::query(
        "INSERT INTO action_changes (id, action_id, entity_type, entity_id, before_json, after_json, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(change.id.as_uuid())
    .bind(change.action_id.as_uuid())
    .bind(change.entity_type.as_str())
    .bind(change.entity_id.as_str())
    .bind(change.before.clone())
    .bind(change.after.clone())
    .bind(change.created_at)
    .execute(conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ActionLogRepository for PostgresActionLogRepository {
    async fn insert(&self, action: NewActionLog) -> DomainResult<ActionLog> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        insert_action(&mut conn, &action).await
    }

    async fn find_with_changes(&self, id: ActionId) -> DomainResult<Option<ActionWithChanges>> {
        let Some(row) = sqlx::query_as::<_, ActionLogRow>(&format!(
            "SELECT {ACTION_COLUMNS} FROM action_log WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        else {
            return Ok(None);
        };

        let changes = sqlx::query_as::<_, ActionChangeRow>(&format!(
            "SELECT {CHANGE_COLUMNS} FROM action_changes WHERE action_id = $1
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(ActionChange::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ActionWithChanges {
            action: ActionLog::try_from(row)?,
            changes,
        }))
    }

    async fn update_status(
        &self,
        id: ActionId,
        expected: ActionStatus,
        next: ActionStatus,
        executed_at: Option<DateTime<Utc>>,
    ) -> DomainResult<ActionLog> {
        let maybe_row = sqlx::query_as::<_, ActionLogRow>(&format!(
            "UPDATE action_log SET status = $3, executed_at = COALESCE($4, executed_at)
             WHERE id = $1 AND status = $2
             RETURNING {ACTION_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(expected.as_str())
        .bind(next.as_str())
        .bind(executed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = maybe_row {
            return ActionLog::try_from(row);
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM action_log WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if exists {
            Err(DomainError::conflict("action status changed concurrently"))
        } else {
            Err(DomainError::not_found("action not found"))
        }
    }

    async fn list(
        &self,
        limit: u32,
        cursor: Option<ActionLogCursor>,
    ) -> DomainResult<(Vec<ActionLog>, Option<ActionLogCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ACTION_COLUMNS} FROM action_log"));
        if let Some(cursor) = &cursor {
            builder.push(" WHERE (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id.as_uuid());
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ActionLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut actions = rows
            .into_iter()
            .map(ActionLog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if actions.len() > limit as usize {
            actions.pop();
            if let Some(last) = actions.last() {
                next_cursor = Some(ActionLogCursor::new(last.created_at, last.id));
            }
        }

        Ok((actions, next_cursor))
    }
}
