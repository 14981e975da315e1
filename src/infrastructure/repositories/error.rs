// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_PRODUCT_SKU: &str = "products_sku_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_PRICE_CHECK: &str = "products_price_cents_check";
const CNT_PRODUCT_STOCK_CHECK: &str = "products_stock_quantity_check";
const CNT_CHANGE_ACTION: &str = "action_changes_action_id_fkey";
const CNT_IMAGE_PRODUCT: &str = "product_images_product_id_fkey";
const CNT_IMAGE_SORT_CHECK: &str = "product_images_sort_order_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_SKU => DomainError::Conflict("sku already exists".into()),
                    CNT_PRODUCT_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_PRODUCT_PRICE_CHECK => {
                        DomainError::Validation("price must be a positive integer".into())
                    }
                    CNT_PRODUCT_STOCK_CHECK => {
                        DomainError::Validation("stock quantity cannot be negative".into())
                    }
                    CNT_CHANGE_ACTION => DomainError::NotFound("action not found".into()),
                    CNT_IMAGE_PRODUCT => DomainError::NotFound("product not found".into()),
                    CNT_IMAGE_SORT_CHECK => {
                        DomainError::Validation("sortOrder must be a non-negative integer".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "40001" => {
                        return DomainError::Conflict("serialization failure, please retry".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
