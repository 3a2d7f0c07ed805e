use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;

pub struct DeleteCategoryParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    /// Fails with `CategoryError::HasProducts` when products still
    /// reference the category; the guard runs before any delete call.
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
}
