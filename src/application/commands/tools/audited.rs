// src/application/commands/tools/audited.rs
use super::ToolCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        action::{
            ActionChange, ActionChangeId, ActionId, ActionIntent, EntityType, NewActionLog,
        },
        errors::DomainError,
        product::{AuditedMutation, FieldMutation, PlannedMutation, Product, ProductId},
    },
};

impl ToolCommandService {
    /// Read, plan, then commit the write with its audit pair.
    ///
    /// A concurrent writer changing the field between read and commit makes
    /// the repository report `Conflict`; the whole cycle is retried against a
    /// fresh read until `max_attempts` is spent. Every attempt reuses the
    /// same timestamp.
    pub(super) async fn execute_audited(
        &self,
        product_id: ProductId,
        mutation: FieldMutation,
    ) -> ApplicationResult<(PlannedMutation, Product)> {
        let now = self.clock.now();
        let intent = ActionIntent::new(mutation.intent())?;
        let mut attempt = 1;

        loop {
            let current = self
                .read_repo
                .find_by_id(product_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("product not found"))?;

            let planned = mutation.plan(&current)?;
            let action_id = ActionId::new(self.ids.next_id());
            let change = ActionChange {
                id: ActionChangeId::new(self.ids.next_id()),
                action_id,
                entity_type: EntityType::Product,
                entity_id: product_id.to_string(),
                before: Some(planned.before_json()),
                after: Some(planned.after_json()),
                created_at: now,
            };
            let audited = AuditedMutation {
                planned: planned.clone(),
                updated_at: now,
                action: NewActionLog::executed_tool_call(action_id, intent.clone(), now),
                change,
            };

            match self.write_repo.apply_audited(audited).await {
                Ok(product) => {
                    tracing::info!(
                        intent = mutation.intent(),
                        product_id = %product_id,
                        action_id = %action_id,
                        before = planned.before,
                        after = planned.after,
                        "tool mutation committed"
                    );
                    return Ok((planned, product));
                }
                Err(DomainError::Conflict(reason)) if attempt < self.max_attempts => {
                    tracing::warn!(
                        intent = mutation.intent(),
                        product_id = %product_id,
                        attempt,
                        %reason,
                        "concurrent write detected; retrying"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
