use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;

pub struct SetTestimonialApprovalParams {
    pub id: Uuid,
    pub is_approved: bool,
}

#[async_trait]
pub trait SetTestimonialApprovalUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SetTestimonialApprovalParams,
    ) -> Result<Testimonial, TestimonialError>;
}
