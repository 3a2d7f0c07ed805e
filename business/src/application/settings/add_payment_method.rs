use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::PaymentMethod;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::add_payment_method::{
    AddPaymentMethodParams, AddPaymentMethodUseCase,
};

pub struct AddPaymentMethodUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddPaymentMethodUseCase for AddPaymentMethodUseCaseImpl {
    async fn execute(
        &self,
        params: AddPaymentMethodParams,
    ) -> Result<PaymentMethod, SettingsError> {
        self.logger
            .info(&format!("Adding payment method: {}", params.name));

        let mut settings = self.repository.load().await?.unwrap_or_default();

        let method = settings.add_payment_method(params.name, params.description)?;
        self.repository.save(&settings).await?;

        Ok(method)
    }
}
