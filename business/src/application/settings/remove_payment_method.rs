use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::remove_payment_method::{
    RemovePaymentMethodParams, RemovePaymentMethodUseCase,
};

pub struct RemovePaymentMethodUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemovePaymentMethodUseCase for RemovePaymentMethodUseCaseImpl {
    async fn execute(&self, params: RemovePaymentMethodParams) -> Result<(), SettingsError> {
        self.logger
            .info(&format!("Removing payment method: {}", params.id));

        let mut settings = self.repository.load().await?.unwrap_or_default();

        settings.remove_payment_method(params.id);
        self.repository.save(&settings).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::settings::model::SiteSettings;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SettingsRepo {}

        #[async_trait]
        impl SettingsRepository for SettingsRepo {
            async fn load(&self) -> Result<Option<SiteSettings>, RepositoryError>;
            async fn save(&self, settings: &SiteSettings) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_remove_existing_method() {
        let settings = SiteSettings::default();
        let method_id = settings.payment_methods[0].id;

        let mut mock_repo = MockSettingsRepo::new();
        mock_repo
            .expect_load()
            .return_once(move || Ok(Some(settings)));
        mock_repo
            .expect_save()
            .withf(move |s| s.payment_methods.len() == 3)
            .returning(|_| Ok(()));

        let use_case = RemovePaymentMethodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemovePaymentMethodParams { id: method_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_for_unknown_id() {
        let mut mock_repo = MockSettingsRepo::new();
        mock_repo.expect_load().returning(|| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RemovePaymentMethodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemovePaymentMethodParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }
}
