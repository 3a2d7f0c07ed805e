use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Testimonial;

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// All testimonials, newest first (admin view).
    async fn get_all(&self) -> Result<Vec<Testimonial>, RepositoryError>;
    /// Approved testimonials only, newest first (public view).
    async fn get_approved(&self) -> Result<Vec<Testimonial>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Testimonial, RepositoryError>;
    async fn save(&self, testimonial: &Testimonial) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
