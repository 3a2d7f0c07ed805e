use async_trait::async_trait;

use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;

pub struct SubmitTestimonialParams {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[async_trait]
pub trait SubmitTestimonialUseCase: Send + Sync {
    /// Public submission; the testimonial awaits admin approval.
    async fn execute(&self, params: SubmitTestimonialParams)
    -> Result<Testimonial, TestimonialError>;
}
