//! Product entity and its creation record.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Product entity with its category eagerly attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Database-assigned identifier
    pub id: i64,

    /// Product title; uniqueness is enforced only at creation
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Non-negative price
    pub price: f64,

    /// Owning category reference
    pub category: Category,
}

/// Input record for creating a product; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_nested_category() {
        let product = Product {
            id: 3,
            title: "Pen".to_string(),
            description: "blue".to_string(),
            price: 1.5,
            category: Category {
                id: 9,
                name: "Stationery".to_string(),
            },
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"]["name"], "Stationery");
        assert_eq!(json["price"], 1.5);
    }
}
