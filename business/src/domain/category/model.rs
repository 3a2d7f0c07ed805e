use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Derived count of products referencing this category. Listings carry
    /// it so the admin panel can block deletion of non-empty categories
    /// without another round trip.
    pub product_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: String,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            image_url,
            product_count: 0,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        image_url: Option<String>,
        product_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            product_count,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_category_when_name_valid() {
        let result = Category::new("Soins Visage".to_string(), None, None);

        assert!(result.is_ok());
        let category = result.unwrap();
        assert_eq!(category.name, "Soins Visage");
        assert_eq!(category.product_count, 0);
    }

    #[test]
    fn should_reject_category_when_name_empty() {
        let result = Category::new("  ".to_string(), None, None);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
