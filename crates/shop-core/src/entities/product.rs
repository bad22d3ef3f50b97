//! Product entity - a catalog item

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Product entity representing one catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new, non-featured product with a fresh ID
    pub fn new(
        name: String,
        description: String,
        price: f64,
        image: String,
        category: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            image,
            category,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip the featured flag
    pub fn toggle_featured(&mut self) {
        self.is_featured = !self.is_featured;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            "Espresso beans".to_string(),
            "1kg dark roast".to_string(),
            18.5,
            "/images/beans.jpg".to_string(),
            "coffee".to_string(),
        )
    }

    #[test]
    fn test_new_product_not_featured() {
        assert!(!sample().is_featured);
    }

    #[test]
    fn test_toggle_featured() {
        let mut product = sample();
        product.toggle_featured();
        assert!(product.is_featured);
        product.toggle_featured();
        assert!(!product.is_featured);
    }
}
