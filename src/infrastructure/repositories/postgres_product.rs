// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use super::postgres_action_log::{insert_action, insert_change};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::product::{
    AuditedMutation, GovernedField, NewProduct, PriceCents, Product, ProductId, ProductName,
    ProductReadRepository, ProductSlug, ProductSort, ProductUpdate, ProductWriteRepository, Sku,
    StockQuantity,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, name, slug, sku, description, price_cents, compare_at_price_cents, \
     stock_quantity, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    slug: String,
    sku: String,
    description: Option<String>,
    price_cents: i64,
    compare_at_price_cents: Option<i64>,
    stock_quantity: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(row.id),
            name: ProductName::new(row.name)?,
            slug: ProductSlug::new(row.slug)?,
            sku: Sku::new(row.sku)?,
            description: row.description,
            price: PriceCents::new(row.price_cents)?,
            compare_at_price: row.compare_at_price_cents.map(PriceCents::new).transpose()?,
            stock: StockQuantity::new(row.stock_quantity)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const fn governed_column(field: GovernedField) -> &'static str {
    match field {
        GovernedField::PriceCents => "price_cents",
        GovernedField::StockQuantity => "stock_quantity",
    }
}

async fn product_exists(conn: &mut PgConnection, id: ProductId) -> DomainResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
        .bind(id.as_uuid())
        .fetch_one(conn)
        .await
        .map_err(map_sqlx)
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            id,
            name,
            slug,
            sku,
            description,
            price,
            compare_at_price,
            stock,
            is_active,
            created_at,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (id, name, slug, sku, description, price_cents, compare_at_price_cents,
                                   stock_quantity, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(sku.as_str())
        .bind(description)
        .bind(price.value())
        .bind(compare_at_price.map(PriceCents::value))
        .bind(stock.value())
        .bind(is_active)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            name,
            slug,
            sku,
            description,
            price,
            compare_at_price,
            stock,
            is_active,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(sku) = sku {
            builder.push(", sku = ");
            builder.push_bind(sku.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(price) = price {
            builder.push(", price_cents = ");
            builder.push_bind(price.value());
        }
        if let Some(compare_at) = compare_at_price {
            builder.push(", compare_at_price_cents = ");
            builder.push_bind(compare_at.map(PriceCents::value));
        }
        if let Some(stock) = stock {
            builder.push(", stock_quantity = ");
            builder.push_bind(stock.value());
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => Product::try_from(row),
            None => {
                let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
                if product_exists(&mut conn, id).await? {
                    Err(DomainError::conflict("product update conflict, please retry"))
                } else {
                    Err(DomainError::not_found("product not found"))
                }
            }
        }
    }

    async fn deactivate(&self, id: ProductId, at: DateTime<Utc>) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET is_active = FALSE, updated_at = $2 WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("product not found"))?;

        Product::try_from(row)
    }

    async fn apply_audited(&self, mutation: AuditedMutation) -> DomainResult<Product> {
        let AuditedMutation {
            planned,
            updated_at,
            action,
            change,
        } = mutation;
        let column = governed_column(planned.field);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let maybe_row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET {column} = $1, updated_at = $2
             WHERE id = $3 AND {column} = $4
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(planned.after)
        .bind(updated_at)
        .bind(planned.product_id.as_uuid())
        .bind(planned.before)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = maybe_row else {
            // Dropping `tx` rolls back; nothing has been written yet.
            return if product_exists(&mut tx, planned.product_id).await? {
                Err(DomainError::conflict(format!(
                    "{} changed concurrently",
                    planned.field.key()
                )))
            } else {
                Err(DomainError::not_found("product not found"))
            };
        };

        insert_action(&mut tx, &action).await?;
        insert_change(&mut tx, &change).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Product::try_from(row)
    }
}

impl PostgresProductReadRepository {
    async fn find_one(&self, column: &str, value: &str) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ProductSort) {
        builder.push(match sort {
            ProductSort::Newest => " ORDER BY created_at DESC, id DESC",
            ProductSort::PriceAsc => " ORDER BY price_cents ASC, id ASC",
            ProductSort::PriceDesc => " ORDER BY price_cents DESC, id ASC",
            ProductSort::NameAsc => " ORDER BY name ASC, id ASC",
            ProductSort::RecentlyUpdated => " ORDER BY updated_at DESC, id DESC",
        });
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        self.find_one("sku", sku.as_str()).await
    }

    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>> {
        self.find_one("slug", slug.as_str()).await
    }

    async fn list_page(
        &self,
        active_only: bool,
        sort: ProductSort,
        page: PageRequest,
    ) -> DomainResult<(Vec<Product>, u64)> {
        let filter = if active_only { " WHERE is_active = TRUE" } else { "" };

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM products{filter}"))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products{filter}"));
        Self::push_ordering(&mut builder, sort);
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, u64::try_from(total).unwrap_or_default()))
    }

    async fn search_active(&self, query: &str, limit: u32) -> DomainResult<Vec<Product>> {
        let pattern = format!("%{}%", escape_like(query));
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE is_active = TRUE AND name ILIKE $1 ESCAPE '\\'
             ORDER BY name ASC, id ASC
             LIMIT $2"
        ))
        .bind(pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn low_stock(&self, threshold: i64) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE is_active = TRUE AND stock_quantity < $1
             ORDER BY stock_quantity ASC, name ASC"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
