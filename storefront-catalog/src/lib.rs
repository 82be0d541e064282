pub mod product;
pub mod inventory;
pub mod sanitization;

pub use product::{Product, ProductError};
pub use inventory::{find_mock_product, MOCK_INVENTORY};
pub use sanitization::clean_all_html;
