pub mod models;
pub mod mockdata;

pub use models::{Order, OrderError};
pub use mockdata::MOCK_ORDERS;
