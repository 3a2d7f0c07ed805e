use async_trait::async_trait;

use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;

#[async_trait]
pub trait GetApprovedTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Testimonial>, TestimonialError>;
}
