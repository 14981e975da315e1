use serde_json::json;
use storefront_core::application::{
    commands::tools::{RestockCommand, UpdatePriceCommand},
    error::ApplicationError,
    services::ServiceSettings,
};
use storefront_core::domain::action::{ActionStatus, ActorType, Channel, EntityType};
use uuid::Uuid;

mod support;
use support::{ProductBuilder, TestContext, fixed_now};

fn restock(product_id: Uuid, quantity: i64) -> RestockCommand {
    RestockCommand {
        product_id: product_id.to_string(),
        quantity,
    }
}

#[tokio::test]
async fn restock_adds_stock_and_records_one_audit_pair() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("MUG-01").stock(7).build();
    let product_id = product.id;
    ctx.catalog.seed(product);

    let result = ctx
        .services
        .tool_commands
        .restock(restock(product_id.as_uuid(), 50))
        .await
        .unwrap();

    assert_eq!(result.product.stock_quantity, 57);
    assert_eq!(result.change.old_quantity, 7);
    assert_eq!(result.change.added_quantity, 50);
    assert_eq!(result.change.new_quantity, 57);
    assert_eq!(ctx.catalog.product(product_id).unwrap().stock.value(), 57);

    let actions = ctx.catalog.actions();
    let changes = ctx.catalog.changes();
    assert_eq!(actions.len(), 1);
    assert_eq!(changes.len(), 1);

    let action = &actions[0];
    assert_eq!(action.intent.as_str(), "restock");
    assert_eq!(action.status, ActionStatus::Executed);
    assert_eq!(action.actor_type, ActorType::Ai);
    assert_eq!(action.channel, Channel::Web);
    assert_eq!(action.created_at, fixed_now());
    assert_eq!(action.executed_at, Some(fixed_now()));

    let change = &changes[0];
    assert_eq!(change.action_id, action.id);
    assert_eq!(change.entity_type, EntityType::Product);
    assert_eq!(change.entity_id, product_id.to_string());
    assert_eq!(change.before, Some(json!({ "stockQuantity": 7 })));
    assert_eq!(change.after, Some(json!({ "stockQuantity": 57 })));
}

#[tokio::test]
async fn update_price_replaces_price_and_records_before_after() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("LAMP-1").price(1000).build();
    let product_id = product.id;
    ctx.catalog.seed(product);

    let result = ctx
        .services
        .tool_commands
        .update_price(UpdatePriceCommand {
            product_id: product_id.to_string(),
            new_price_cents: 1299,
        })
        .await
        .unwrap();

    assert_eq!(result.product.price_cents, 1299);
    assert_eq!(result.change.old_price_cents, 1000);
    assert_eq!(result.change.new_price_cents, 1299);
    assert_eq!(result.product.updated_at, fixed_now());

    let actions = ctx.catalog.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].intent.as_str(), "update_price");

    let changes = ctx.catalog.changes();
    assert_eq!(changes[0].before, Some(json!({ "priceCents": 1000 })));
    assert_eq!(changes[0].after, Some(json!({ "priceCents": 1299 })));
}

#[tokio::test]
async fn missing_product_is_not_found_and_leaves_no_audit() {
    let ctx = TestContext::new();

    let err = ctx
        .services
        .tool_commands
        .update_price(UpdatePriceCommand {
            product_id: Uuid::new_v4().to_string(),
            new_price_cents: 500,
        })
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert!(ctx.catalog.actions().is_empty());
    assert!(ctx.catalog.changes().is_empty());
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_lookup() {
    let ctx = TestContext::new();
    let tools = &ctx.services.tool_commands;

    // Unknown product, but the quantity is checked first.
    let err = tools.restock(restock(Uuid::new_v4(), 0)).await.unwrap_err();
    assert!(err.is_validation(), "unexpected error: {err:?}");

    let err = tools
        .update_price(UpdatePriceCommand {
            product_id: Uuid::new_v4().to_string(),
            new_price_cents: -1,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.flatten(),
        ApplicationError::Validation(ref msg) if msg == "newPriceCents must be a positive integer"
    ));

    let err = tools
        .restock(RestockCommand {
            product_id: "not-a-uuid".into(),
            quantity: 5,
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(ctx.catalog.actions().is_empty());
}

#[tokio::test]
async fn lost_race_is_retried_against_a_fresh_read() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("SOCK-3").stock(8).build();
    let product_id = product.id;
    ctx.catalog.seed(product);
    ctx.catalog.inject_conflicts(1);

    let result = ctx
        .services
        .tool_commands
        .restock(restock(product_id.as_uuid(), 50))
        .await
        .unwrap();

    // The competing writer took stock to 9 before the retry read it.
    assert_eq!(result.change.old_quantity, 9);
    assert_eq!(result.change.new_quantity, 59);
    assert_eq!(ctx.catalog.product(product_id).unwrap().stock.value(), 59);

    let changes = ctx.catalog.changes();
    assert_eq!(ctx.catalog.actions().len(), 1);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].before, Some(json!({ "stockQuantity": 9 })));
    assert_eq!(changes[0].after, Some(json!({ "stockQuantity": 59 })));
}

#[tokio::test]
async fn exhausted_retries_surface_conflict_without_audit() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("SOCK-4").stock(8).build();
    let product_id = product.id;
    ctx.catalog.seed(product);
    ctx.catalog.inject_conflicts(3);

    let err = ctx
        .services
        .tool_commands
        .restock(restock(product_id.as_uuid(), 50))
        .await
        .unwrap_err();

    assert!(matches!(err.flatten(), ApplicationError::Conflict(_)));
    assert!(ctx.catalog.actions().is_empty());
    assert!(ctx.catalog.changes().is_empty());
    // Only the simulated competing writes landed.
    assert_eq!(ctx.catalog.product(product_id).unwrap().stock.value(), 11);
}

#[tokio::test]
async fn single_attempt_setting_disables_retries() {
    let ctx = TestContext::with_settings(ServiceSettings {
        tool_max_attempts: 1,
        ..ServiceSettings::default()
    });
    let product = ProductBuilder::new("CUP-9").price(2000).build();
    let product_id = product.id;
    ctx.catalog.seed(product);
    ctx.catalog.inject_conflicts(1);

    let err = ctx
        .services
        .tool_commands
        .update_price(UpdatePriceCommand {
            product_id: product_id.to_string(),
            new_price_cents: 2500,
        })
        .await
        .unwrap_err();

    assert!(matches!(err.flatten(), ApplicationError::Conflict(_)));
    assert!(ctx.catalog.actions().is_empty());
}

#[tokio::test]
async fn storage_failure_writes_nothing() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("PAN-2").stock(4).build();
    let product_id = product.id;
    ctx.catalog.seed(product);
    ctx.catalog.fail_writes();

    let err = ctx
        .services
        .tool_commands
        .restock(restock(product_id.as_uuid(), 1))
        .await
        .unwrap_err();

    assert!(matches!(err.flatten(), ApplicationError::Infrastructure(_)));
    assert_eq!(ctx.catalog.product(product_id).unwrap().stock.value(), 4);
    assert!(ctx.catalog.actions().is_empty());
}

#[tokio::test]
async fn each_call_records_its_own_action() {
    let ctx = TestContext::new();
    let product = ProductBuilder::new("BOWL-7").stock(0).build();
    let product_id = product.id;
    ctx.catalog.seed(product);

    for _ in 0..3 {
        ctx.services
            .tool_commands
            .restock(restock(product_id.as_uuid(), 2))
            .await
            .unwrap();
    }

    let changes = ctx.catalog.changes();
    assert_eq!(ctx.catalog.actions().len(), 3);
    let befores: Vec<_> = changes
        .iter()
        .map(|c| c.before.clone().unwrap()["stockQuantity"].as_i64().unwrap())
        .collect();
    assert_eq!(befores, [0, 2, 4]);
    assert_eq!(ctx.catalog.product(product_id).unwrap().stock.value(), 6);
}
