use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::settings::errors::SettingsError;

pub struct RemoveSocialLinkParams {
    pub id: Uuid,
}

#[async_trait]
pub trait RemoveSocialLinkUseCase: Send + Sync {
    async fn execute(&self, params: RemoveSocialLinkParams) -> Result<(), SettingsError>;
}
