use std::sync::Arc;

use storefront_core::application::{
    commands::tools::{RestockCommand, ToolCommandService, UpdatePriceCommand},
    ports::{time::Clock, util::IdGenerator},
};
use storefront_core::domain::{
    action::{ActionId, ActionLogRepository},
    product::{
        ImageUrl, NewProduct, NewProductImage, PriceCents, ProductId, ProductImageId,
        ProductImageRepository, ProductName, ProductReadRepository, ProductSlug,
        ProductWriteRepository, SortOrder, Sku, StockQuantity,
    },
};
use storefront_core::infrastructure::{
    database,
    repositories::{
        PostgresActionLogRepository, PostgresProductImageRepository,
        PostgresProductReadRepository, PostgresProductWriteRepository,
    },
    time::SystemClock,
    util::UuidGenerator,
};
use uuid::Uuid;

#[tokio::test]
async fn integration_audited_tool_mutations() {
    // Run only when explicitly enabled to avoid requiring Postgres in all environments
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 8).await.expect("init pool");
    database::run_migrations(&pool).await.expect("run migrations");

    let read: Arc<dyn ProductReadRepository> =
        Arc::new(PostgresProductReadRepository::new(pool.clone()));
    let write: Arc<dyn ProductWriteRepository> =
        Arc::new(PostgresProductWriteRepository::new(pool.clone()));
    let actions: Arc<dyn ActionLogRepository> =
        Arc::new(PostgresActionLogRepository::new(pool.clone()));
    let images: Arc<dyn ProductImageRepository> =
        Arc::new(PostgresProductImageRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    let tag = Uuid::new_v4().simple().to_string();
    let product_id = ProductId::new(Uuid::new_v4());
    write
        .insert(NewProduct {
            id: product_id,
            name: ProductName::new(format!("Integration {tag}")).unwrap(),
            slug: ProductSlug::new(format!("integration-{tag}")).unwrap(),
            sku: Sku::new(format!("IT-{tag}")).unwrap(),
            description: None,
            price: PriceCents::new(1000).unwrap(),
            compare_at_price: None,
            stock: StockQuantity::new(7).unwrap(),
            is_active: true,
            created_at: clock.now(),
        })
        .await
        .expect("insert product");

    for (name, order) in [("b.jpg", 1), ("a.jpg", 0)] {
        images
            .insert(NewProductImage {
                id: ProductImageId::new(Uuid::new_v4()),
                product_id,
                url: ImageUrl::new(format!("https://cdn.example.com/{tag}/{name}")).unwrap(),
                sort_order: SortOrder::new(order).unwrap(),
                created_at: clock.now(),
            })
            .await
            .expect("insert image");
    }
    let stored_images = images
        .list_for_product(product_id)
        .await
        .expect("list images");
    assert_eq!(stored_images.len(), 2);
    assert!(stored_images[0].url.as_str().ends_with("/a.jpg"));

    let orphan = images
        .insert(NewProductImage {
            id: ProductImageId::new(Uuid::new_v4()),
            product_id: ProductId::new(Uuid::new_v4()),
            url: ImageUrl::new("https://cdn.example.com/orphan.jpg").unwrap(),
            sort_order: SortOrder::default(),
            created_at: clock.now(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        orphan,
        storefront_core::domain::errors::DomainError::NotFound(_)
    ));

    let tools = Arc::new(
        ToolCommandService::new(Arc::clone(&read), Arc::clone(&write), clock, ids)
            .with_max_attempts(20),
    );

    let restocked = tools
        .restock(RestockCommand {
            product_id: product_id.to_string(),
            quantity: 50,
        })
        .await
        .expect("restock");
    assert_eq!(restocked.product.stock_quantity, 57);

    let priced = tools
        .update_price(UpdatePriceCommand {
            product_id: product_id.to_string(),
            new_price_cents: 1299,
        })
        .await
        .expect("update price");
    assert_eq!(priced.change.old_price_cents, 1000);

    // Concurrent restocks: every success is reflected exactly once.
    let mut handles = Vec::new();
    for _ in 0..4 {
        let tools = Arc::clone(&tools);
        let product_id = product_id.to_string();
        handles.push(tokio::spawn(async move {
            tools
                .restock(RestockCommand {
                    product_id,
                    quantity: 1,
                })
                .await
        }));
    }
    let mut succeeded = 0;
    for handle in handles {
        if handle.await.expect("join").is_ok() {
            succeeded += 1;
        }
    }

    let stored = read
        .find_by_id(product_id)
        .await
        .expect("find")
        .expect("product exists");
    assert_eq!(stored.stock.value(), 57 + succeeded);

    let action_ids: Vec<Uuid> = sqlx::query_scalar(
        "SELECT action_id FROM action_changes WHERE entity_type = 'product' AND entity_id = $1",
    )
    .bind(product_id.to_string())
    .fetch_all(&pool)
    .await
    .expect("list changes");
    assert_eq!(action_ids.len() as i64, 2 + succeeded);

    let first = actions
        .find_with_changes(ActionId::new(action_ids[0]))
        .await
        .expect("find action")
        .expect("action exists");
    assert_eq!(first.action.status.as_str(), "executed");
    assert_eq!(first.changes.len(), 1);
    let before = first.changes[0].before.clone().expect("before snapshot");
    let after = first.changes[0].after.clone().expect("after snapshot");
    assert_eq!(before.as_object().map(|o| o.len()), Some(1));
    assert_eq!(after.as_object().map(|o| o.len()), Some(1));

    // cleanup test rows; images go with the product
    sqlx::query("DELETE FROM action_log WHERE id = ANY($1)")
        .bind(&action_ids)
        .execute(&pool)
        .await
        .expect("cleanup actions");
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(product_id.as_uuid())
        .execute(&pool)
        .await
        .expect("cleanup product");
}
