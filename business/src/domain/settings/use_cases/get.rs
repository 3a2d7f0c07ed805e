use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::SiteSettings;

#[async_trait]
pub trait GetSiteSettingsUseCase: Send + Sync {
    /// Persisted settings when present, otherwise the static defaults.
    /// Nothing is persisted until the first mutation.
    async fn execute(&self) -> Result<SiteSettings, SettingsError>;
}
