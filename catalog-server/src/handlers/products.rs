use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use catalog_core::Product;

use crate::{AppState, errors::AppResult};

/// List every product in the catalog.
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.repository.list_all().await?;
    Ok(Json(products))
}

/// List products flagged for promotional display.
pub async fn list_featured_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.repository.list_featured().await?;
    Ok(Json(products))
}

/// Fetch a single product; 404 with the offending id when absent.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = state.repository.get_by_id(id).await?;
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    /// Optional sub-category filter; blank values are ignored.
    pub sub: Option<String>,
}

/// List products in a category, optionally narrowed by `?sub=`.
pub async fn list_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .repository
        .list_by_category(&category, params.sub.as_deref())
        .await?;
    Ok(Json(products))
}
