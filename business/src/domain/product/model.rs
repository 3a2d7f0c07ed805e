use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;

/// A catalog product.
///
/// The category is a referenced id with a denormalized display name so that
/// listings and search never need a second lookup.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit price in the base currency (EUR).
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub image_url: String,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub image_url: String,
    pub video_url: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            category_id: props.category_id,
            category_name: props.category_name,
            image_url: props.image_url,
            video_url: props.video_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        category_id: Option<Uuid>,
        category_name: Option<String>,
        image_url: String,
        video_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category_id,
            category_name,
            image_url,
            video_url,
            created_at,
            updated_at,
        }
    }
}
