pub mod mode;
pub mod repository;
pub mod mock;
pub mod inventory;

pub use inventory::{InventoryService, OrderService};
pub use mock::MockSource;
pub use mode::RunMode;
pub use repository::{InventorySource, OrderSource, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
