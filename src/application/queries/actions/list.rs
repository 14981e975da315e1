use super::ActionQueryService;
use crate::{
    application::{
        dto::{ActionLogDto, CursorPage},
        error::ApplicationResult,
    },
    domain::action::ActionLogCursor,
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub struct ListActionsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ActionQueryService {
    pub async fn list_actions(&self, query: ListActionsQuery) -> ApplicationResult<CursorPage<ActionLogDto>> {
        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(ActionLogCursor::decode)
            .transpose()?;

        let (records, next_cursor) = self.repo.list(limit, cursor).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(items, next_cursor.map(|c| c.encode())))
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(value) => value.min(MAX_LIMIT),
    }
}
