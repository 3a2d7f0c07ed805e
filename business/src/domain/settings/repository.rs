use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::SiteSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the persisted settings, or `None` when nothing was ever
    /// saved or the stored shape predates `SETTINGS_SCHEMA_VERSION`.
    async fn load(&self) -> Result<Option<SiteSettings>, RepositoryError>;
    async fn save(&self, settings: &SiteSettings) -> Result<(), RepositoryError>;
}
