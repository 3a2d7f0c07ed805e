use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::{ContactInfoPatch, SiteSettings};

#[async_trait]
pub trait UpdateContactInfoUseCase: Send + Sync {
    async fn execute(&self, patch: ContactInfoPatch) -> Result<SiteSettings, SettingsError>;
}
