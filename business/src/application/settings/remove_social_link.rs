use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::remove_social_link::{
    RemoveSocialLinkParams, RemoveSocialLinkUseCase,
};

pub struct RemoveSocialLinkUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveSocialLinkUseCase for RemoveSocialLinkUseCaseImpl {
    async fn execute(&self, params: RemoveSocialLinkParams) -> Result<(), SettingsError> {
        self.logger
            .info(&format!("Removing social link: {}", params.id));

        let mut settings = self.repository.load().await?.unwrap_or_default();

        // Unknown ids are a silent no-op.
        settings.remove_social_link(params.id);
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
    async fn should_remove_existing_link() {
        let settings = SiteSettings::default();
        let link_id = settings.social_links[0].id;

        let mut mock_repo = MockSettingsRepo::new();
        mock_repo
            .expect_load()
            .return_once(move || Ok(Some(settings)));
        mock_repo
            .expect_save()
            .withf(move |s| !s.social_links.iter().any(|l| l.id == link_id))
            .returning(|_| Ok(()));

        let use_case = RemoveSocialLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveSocialLinkParams { id: link_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_for_unknown_id() {
        let mut mock_repo = MockSettingsRepo::new();
        mock_repo.expect_load().returning(|| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RemoveSocialLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveSocialLinkParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }
}
