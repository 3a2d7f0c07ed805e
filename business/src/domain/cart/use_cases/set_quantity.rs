use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct SetCartItemQuantityParams {
    pub session_id: SessionId,
    pub product_id: Uuid,
    pub quantity: u32,
}

#[async_trait]
pub trait SetCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetCartItemQuantityParams) -> Result<Cart, CartError>;
}
