use axum::{extract::State, routing::get, Json, Router};
use storefront_order::Order;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/orders", get(list_orders))
}

/// GET /api/orders
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.get_all_orders().await?;
    Ok(Json(orders))
}
