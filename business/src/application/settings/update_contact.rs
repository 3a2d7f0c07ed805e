use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::{ContactInfoPatch, SiteSettings};
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::update_contact::UpdateContactInfoUseCase;

pub struct UpdateContactInfoUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateContactInfoUseCase for UpdateContactInfoUseCaseImpl {
    async fn execute(&self, patch: ContactInfoPatch) -> Result<SiteSettings, SettingsError> {
        self.logger.info("Updating contact info");

        // First mutation materializes the defaults.
        let mut settings = self.repository.load().await?.unwrap_or_default();

        settings.merge_contact(patch);
        self.repository.save(&settings).await?;

        Ok(settings)
    }
}
