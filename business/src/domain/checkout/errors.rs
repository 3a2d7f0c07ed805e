#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.missing_required_field")]
    MissingField(&'static str),
    #[error("checkout.cart_empty")]
    CartEmpty,
    #[error("checkout.destination_invalid")]
    DestinationInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
