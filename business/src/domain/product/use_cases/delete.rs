use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Removes the product from the catalog. Cart lines that snapshotted it
    /// are left as they are.
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
