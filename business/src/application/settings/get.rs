use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::SiteSettings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::get::GetSiteSettingsUseCase;

pub struct GetSiteSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSiteSettingsUseCase for GetSiteSettingsUseCaseImpl {
    async fn execute(&self) -> Result<SiteSettings, SettingsError> {
        self.logger.debug("Fetching site settings");

        let settings = self.repository.load().await?.unwrap_or_default();

        Ok(settings)
    }
}
