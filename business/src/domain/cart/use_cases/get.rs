use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct GetCartParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    /// Returns the session's cart, empty when nothing was ever added.
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError>;
}
