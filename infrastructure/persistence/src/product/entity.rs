use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

/// Row shape of the catalog queries. `category_name` comes from a LEFT
/// JOIN on categories, never from the products table itself.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub image_url: String,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.category_id,
            self.category_name,
            self.image_url,
            self.video_url,
            self.created_at,
            self.updated_at,
        )
    }
}
