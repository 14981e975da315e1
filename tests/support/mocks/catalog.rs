// tests/support/mocks/catalog.rs
//! In-memory product catalog and action log sharing one lock, so an audited
//! mutation lands its product write and audit pair together like the
//! Postgres transaction does.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use storefront_core::domain::{
    action::{
        ActionChange, ActionId, ActionLog, ActionLogCursor, ActionLogRepository, ActionStatus,
        ActionWithChanges, NewActionLog,
    },
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    product::{
        AuditedMutation, GovernedField, NewProduct, NewProductImage, PriceCents, Product,
        ProductId, ProductImage, ProductImageRepository, ProductReadRepository, ProductSlug,
        ProductSort, ProductUpdate, ProductWriteRepository, Sku, StockQuantity,
    },
};

#[derive(Default)]
struct CatalogState {
    products: HashMap<ProductId, Product>,
    actions: Vec<ActionLog>,
    changes: Vec<ActionChange>,
    images: Vec<ProductImage>,
    pending_conflicts: u32,
    fail_writes: bool,
}

#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, product: Product) {
        self.state
            .lock()
            .unwrap()
            .products
            .insert(product.id, product);
    }

    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.state.lock().unwrap().products.get(&id).cloned()
    }

    pub fn actions(&self) -> Vec<ActionLog> {
        self.state.lock().unwrap().actions.clone()
    }

    pub fn changes(&self) -> Vec<ActionChange> {
        self.state.lock().unwrap().changes.clone()
    }

    pub fn images(&self) -> Vec<ProductImage> {
        self.state.lock().unwrap().images.clone()
    }

    /// The next `n` audited writes find the governed field bumped by one, as
    /// if another writer committed between read and write.
    pub fn inject_conflicts(&self, n: u32) {
        self.state.lock().unwrap().pending_conflicts = n;
    }

    /// Every following write fails like a lost database connection.
    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }
}

fn bump(product: &mut Product, field: GovernedField) {
    match field {
        GovernedField::PriceCents => {
            if let Ok(price) = PriceCents::new(product.price.value() + 1) {
                product.price = price;
            }
        }
        GovernedField::StockQuantity => {
            if let Ok(stock) = StockQuantity::new(product.stock.value() + 1) {
                product.stock = stock;
            }
        }
    }
}

fn ensure_unique(
    products: &HashMap<ProductId, Product>,
    id: ProductId,
    sku: Option<&Sku>,
    slug: Option<&ProductSlug>,
) -> DomainResult<()> {
    for other in products.values().filter(|p| p.id != id) {
        if sku.is_some_and(|sku| &other.sku == sku) {
            return Err(DomainError::conflict("sku already exists"));
        }
        if slug.is_some_and(|slug| &other.slug == slug) {
            return Err(DomainError::conflict("slug already exists"));
        }
    }
    Ok(())
}

fn sort_products(products: &mut [Product], sort: ProductSort) {
    match sort {
        ProductSort::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProductSort::PriceAsc => products.sort_by_key(|p| p.price),
        ProductSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSort::NameAsc => products.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str())),
        ProductSort::RecentlyUpdated => products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        ensure_unique(
            &state.products,
            product.id,
            Some(&product.sku),
            Some(&product.slug),
        )?;
        let created = Product {
            id: product.id,
            name: product.name,
            slug: product.slug,
            sku: product.sku,
            description: product.description,
            price: product.price,
            compare_at_price: product.compare_at_price,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        state.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        ensure_unique(
            &state.products,
            update.id,
            update.sku.as_ref(),
            update.slug.as_ref(),
        )?;
        let product = state
            .products
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::not_found("product not found"))?;
        if product.updated_at != update.original_updated_at {
            return Err(DomainError::conflict("product was modified concurrently"));
        }
        update.apply_to(product);
        Ok(product.clone())
    }

    async fn deactivate(&self, id: ProductId, at: DateTime<Utc>) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        let product = state
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("product not found"))?;
        product.is_active = false;
        product.updated_at = at;
        Ok(product.clone())
    }

    async fn apply_audited(&self, mutation: AuditedMutation) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let inject = state.pending_conflicts > 0;
        if inject {
            state.pending_conflicts -= 1;
        }

        let product = state
            .products
            .get_mut(&mutation.planned.product_id)
            .ok_or_else(|| DomainError::not_found("product not found"))?;
        if inject {
            bump(product, mutation.planned.field);
        }
        if !mutation.planned.matches(product) {
            return Err(DomainError::conflict(format!(
                "{} changed concurrently",
                mutation.planned.field.key()
            )));
        }

        let mut updated = product.clone();
        mutation.planned.apply_to(&mut updated, mutation.updated_at)?;
        *product = updated.clone();

        state.actions.push(ActionLog::from(mutation.action));
        state.changes.push(mutation.change);
        Ok(updated)
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.product(id))
    }

    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.values().find(|p| &p.sku == sku).cloned())
    }

    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        active_only: bool,
        sort: ProductSort,
        page: PageRequest,
    ) -> DomainResult<(Vec<Product>, u64)> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<Product> = state
            .products
            .values()
            .filter(|p| !active_only || p.is_active)
            .cloned()
            .collect();
        sort_products(&mut matching, sort);
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn search_active(&self, query: &str, limit: u32) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        let needle = query.to_lowercase();
        let mut found: Vec<Product> = state
            .products
            .values()
            .filter(|p| p.is_active && p.name.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        sort_products(&mut found, ProductSort::NameAsc);
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn low_stock(&self, threshold: i64) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        let mut found: Vec<Product> = state
            .products
            .values()
            .filter(|p| p.is_active && p.stock.value() < threshold)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.stock);
        Ok(found)
    }
}

#[async_trait]
impl ActionLogRepository for InMemoryCatalog {
    async fn insert(&self, action: NewActionLog) -> DomainResult<ActionLog> {
        let log = ActionLog::from(action);
        self.state.lock().unwrap().actions.push(log.clone());
        Ok(log)
    }

    async fn find_with_changes(&self, id: ActionId) -> DomainResult<Option<ActionWithChanges>> {
        let state = self.state.lock().unwrap();
        let Some(action) = state.actions.iter().find(|a| a.id == id).cloned() else {
            return Ok(None);
        };
        let changes = state
            .changes
            .iter()
            .filter(|c| c.action_id == id)
            .cloned()
            .collect();
        Ok(Some(ActionWithChanges { action, changes }))
    }

    async fn update_status(
        &self,
        id: ActionId,
        expected: ActionStatus,
        next: ActionStatus,
        executed_at: Option<DateTime<Utc>>,
    ) -> DomainResult<ActionLog> {
        let mut state = self.state.lock().unwrap();
        let action = state
            .actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("action not found"))?;
        if action.status != expected {
            return Err(DomainError::conflict("action status changed concurrently"));
        }
        action.status = next;
        action.executed_at = executed_at;
        Ok(action.clone())
    }

    async fn list(
        &self,
        limit: u32,
        cursor: Option<ActionLogCursor>,
    ) -> DomainResult<(Vec<ActionLog>, Option<ActionLogCursor>)> {
        let state = self.state.lock().unwrap();
        let mut ordered = state.actions.clone();
        ordered.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let mut page: Vec<ActionLog> = ordered
            .into_iter()
            .filter(|a| match &cursor {
                Some(c) => (a.created_at, a.id) < (c.created_at, c.id),
                None => true,
            })
            .take(limit as usize + 1)
            .collect();

        let next = if page.len() > limit as usize {
            page.truncate(limit as usize);
            page.last()
                .map(|last| ActionLogCursor::new(last.created_at, last.id))
        } else {
            None
        };
        Ok((page, next))
    }
}

#[async_trait]
impl ProductImageRepository for InMemoryCatalog {
    async fn insert(&self, image: NewProductImage) -> DomainResult<ProductImage> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(DomainError::Persistence("connection lost".into()));
        }
        if !state.products.contains_key(&image.product_id) {
            return Err(DomainError::not_found("product not found"));
        }
        let image = ProductImage::from(image);
        state.images.push(image.clone());
        Ok(image)
    }

    async fn list_for_product(&self, product_id: ProductId) -> DomainResult<Vec<ProductImage>> {
        let state = self.state.lock().unwrap();
        let mut images: Vec<ProductImage> = state
            .images
            .iter()
            .filter(|image| image.product_id == product_id)
            .cloned()
            .collect();
        images.sort_by_key(|image| (image.sort_order, image.created_at));
        Ok(images)
    }
}
