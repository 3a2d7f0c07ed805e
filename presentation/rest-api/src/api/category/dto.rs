use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (cannot be empty)
    pub name: String,
    /// Optional description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Optional banner image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

/// Partial update: absent fields keep their stored value. `description`
/// and `image_url` accept an empty string to clear the stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateCategoryRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    /// Category display name
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Number of products currently assigned to this category
    pub product_count: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            description: category.description,
            image_url: category.image_url,
            product_count: category.product_count,
            created_at: category.created_at,
        }
    }
}
