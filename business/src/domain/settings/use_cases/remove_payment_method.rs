use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::settings::errors::SettingsError;

pub struct RemovePaymentMethodParams {
    pub id: Uuid,
}

#[async_trait]
pub trait RemovePaymentMethodUseCase: Send + Sync {
    async fn execute(&self, params: RemovePaymentMethodParams) -> Result<(), SettingsError>;
}
