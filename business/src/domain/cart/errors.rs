#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_invalid")]
    QuantityInvalid,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
