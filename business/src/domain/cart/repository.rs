use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the stored cart for the session, or `None` when the session
    /// has never added anything.
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
    /// Replaces the stored line list with the cart's current one.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
