use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::SocialLink;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::add_social_link::{
    AddSocialLinkParams, AddSocialLinkUseCase,
};

pub struct AddSocialLinkUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddSocialLinkUseCase for AddSocialLinkUseCaseImpl {
    async fn execute(&self, params: AddSocialLinkParams) -> Result<SocialLink, SettingsError> {
        self.logger
            .info(&format!("Adding social link: {}", params.platform));

        let mut settings = self.repository.load().await?.unwrap_or_default();

        let link = settings.add_social_link(params.platform, params.url, params.icon)?;
        self.repository.save(&settings).await?;

        Ok(link)
    }
}
