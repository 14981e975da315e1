use super::ActionQueryService;
use crate::{
    application::{
        dto::ActionDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::action::ActionId,
};

impl ActionQueryService {
    pub async fn get_action(&self, id: &str) -> ApplicationResult<ActionDetailDto> {
        let id = ActionId::parse(id)?;
        let found = self
            .repo
            .find_with_changes(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("action not found"))?;
        Ok(found.into())
    }
}
