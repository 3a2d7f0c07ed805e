use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::testimonial::errors::TestimonialError;

pub struct DeleteTestimonialParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, params: DeleteTestimonialParams) -> Result<(), TestimonialError>;
}
