use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use storefront_catalog::MOCK_INVENTORY;

use crate::models::Order;

/// 2023-01-01T23:59:00Z, the placement time shared by every mock order
fn mock_order_datetime() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|date| date.and_hms_opt(23, 59, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Hard-coded orders for development runs, one per mock product
pub static MOCK_ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| {
    MOCK_INVENTORY
        .iter()
        .enumerate()
        .map(|(index, product)| {
            Order::new(
                format!("mock_order_{}", index + 1),
                mock_order_datetime(),
                product.clone(),
            )
        })
        .collect()
});
