use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use storefront_catalog::Product;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items))
        .route("/api/items/{id}", get(get_item))
}

/// GET /api/items
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.inventory.get_all_products().await?;
    Ok(Json(products))
}

/// GET /api/items/{id}
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    state
        .inventory
        .get_product(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Product not found: {}", id)))
}
