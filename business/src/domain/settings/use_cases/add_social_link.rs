use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::SocialLink;

pub struct AddSocialLinkParams {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[async_trait]
pub trait AddSocialLinkUseCase: Send + Sync {
    async fn execute(&self, params: AddSocialLinkParams) -> Result<SocialLink, SettingsError>;
}
