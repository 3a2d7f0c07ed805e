#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.has_products")]
    HasProducts,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
