use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct AddCartItemParams {
    pub session_id: SessionId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    /// Adds one unit of the product to the session's cart, snapshotting its
    /// display fields. Fails with `CartError::ProductNotFound` when the
    /// product does not exist in the catalog.
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
