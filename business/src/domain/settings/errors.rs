#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings.platform_empty")]
    PlatformEmpty,
    #[error("settings.url_invalid")]
    UrlInvalid,
    #[error("settings.payment_name_empty")]
    PaymentNameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
