use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog id of the product to add
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct SetCartItemQuantityRequest {
    /// New quantity for the line (minimum 1)
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    /// Product name as snapshotted when the line was added
    pub name: String,
    /// Unit price in the base currency, as a decimal string
    pub unit_price: String,
    /// Line subtotal (unit price times quantity), as a decimal string
    pub subtotal: String,
    pub image_url: String,
    #[oai(skip_serializing_if_is_none)]
    pub category_name: Option<String>,
    pub quantity: u32,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name.clone(),
            unit_price: item.unit_price.to_string(),
            subtotal: item.subtotal().to_string(),
            image_url: item.image_url.clone(),
            category_name: item.category_name.clone(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub session_id: String,
    pub items: Vec<CartItemResponse>,
    /// Sum of quantities across all lines
    pub total_items: u32,
    /// Sum of line subtotals in the base currency, as a decimal string
    pub total_price: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            session_id: cart.session_id.to_string(),
            items: cart.items.iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price().to_string(),
            updated_at: cart.updated_at,
        }
    }
}
