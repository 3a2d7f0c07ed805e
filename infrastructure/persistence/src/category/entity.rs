use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;

/// Row shape of the category queries; `product_count` is an aggregate over
/// the products table.
#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub product_count: i64,
    pub created_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(
            self.id,
            self.name,
            self.description,
            self.image_url,
            self.product_count,
            self.created_at,
        )
    }
}
