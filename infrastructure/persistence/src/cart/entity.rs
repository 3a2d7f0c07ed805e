use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;

/// One row per (session, product) pair; the session's cart is the set of
/// its rows.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub session_id: String,
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub image_url: String,
    pub category_name: Option<String>,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            product_id: self.product_id,
            name: self.name,
            unit_price: self.unit_price,
            image_url: self.image_url,
            category_name: self.category_name,
            // quantity is CHECKed >= 1 in the schema
            quantity: u32::try_from(self.quantity).unwrap_or(1),
        }
    }
}
