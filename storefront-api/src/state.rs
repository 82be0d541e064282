use storefront_core::{InventoryService, OrderService};
use storefront_store::Sources;

#[derive(Clone)]
pub struct AppState {
    pub inventory: InventoryService,
    pub orders: OrderService,
}

impl From<Sources> for AppState {
    fn from(sources: Sources) -> Self {
        Self {
            inventory: sources.inventory,
            orders: sources.orders,
        }
    }
}
