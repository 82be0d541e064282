use std::sync::LazyLock;

use crate::product::Product;

/// Hard-coded inventory used in development runs in place of the items API
pub static MOCK_INVENTORY: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new("mock_product_1", "Mock Product 1", 11.99),
        Product::new("mock_product_2", "Mock Product 2", 12.99),
    ]
});

/// Look up a product in the mock inventory by id
pub fn find_mock_product(id: &str) -> Option<&'static Product> {
    MOCK_INVENTORY.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_inventory_contents() {
        assert_eq!(
            *MOCK_INVENTORY,
            vec![
                Product::new("mock_product_1", "Mock Product 1", 11.99),
                Product::new("mock_product_2", "Mock Product 2", 12.99),
            ]
        );
    }

    #[test]
    fn test_mock_inventory_is_valid() {
        for product in MOCK_INVENTORY.iter() {
            product.validate().unwrap();
        }

        let ids: HashSet<_> = MOCK_INVENTORY.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), MOCK_INVENTORY.len());
    }

    #[test]
    fn test_find_mock_product() {
        assert_eq!(find_mock_product("mock_product_2").unwrap().price, 12.99);
        assert!(find_mock_product("missing").is_none());
    }
}
