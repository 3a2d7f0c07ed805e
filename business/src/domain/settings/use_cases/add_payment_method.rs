use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::PaymentMethod;

pub struct AddPaymentMethodParams {
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait AddPaymentMethodUseCase: Send + Sync {
    async fn execute(&self, params: AddPaymentMethodParams)
    -> Result<PaymentMethod, SettingsError>;
}
