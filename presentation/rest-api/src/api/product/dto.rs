use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Prices travel as decimal strings ("45.00") to avoid float rounding on
/// the wire.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    #[oai(default)]
    pub description: String,
    /// Unit price in the base currency, as a decimal string
    pub price: String,
    /// Category id
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    /// Main product image URL
    pub image_url: String,
    /// Optional product video URL
    #[oai(skip_serializing_if_is_none)]
    pub video_url: Option<String>,
}

/// Partial update: absent fields keep their stored value. `category_id`
/// and `video_url` accept an empty string to clear the stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price in the base currency, as a decimal string
    pub price: String,
    /// Category id
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    /// Category display name
    #[oai(skip_serializing_if_is_none)]
    pub category_name: Option<String>,
    /// Main product image URL
    pub image_url: String,
    /// Optional product video URL
    #[oai(skip_serializing_if_is_none)]
    pub video_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            category_id: product.category_id.map(|id| id.to_string()),
            category_name: product.category_name,
            image_url: product.image_url,
            video_url: product.video_url,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
