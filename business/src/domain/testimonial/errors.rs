#[derive(Debug, thiserror::Error)]
pub enum TestimonialError {
    #[error("testimonial.name_empty")]
    NameEmpty,
    #[error("testimonial.message_empty")]
    MessageEmpty,
    #[error("testimonial.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
