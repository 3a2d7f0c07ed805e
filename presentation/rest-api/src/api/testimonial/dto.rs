use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::testimonial::model::Testimonial;

#[derive(Debug, Clone, Object)]
pub struct SubmitTestimonialRequest {
    /// Customer name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    /// Review text (cannot be empty)
    pub message: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SetApprovalRequest {
    pub is_approved: bool,
}

#[derive(Debug, Clone, Object)]
pub struct TestimonialResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    pub message: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub video_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id.to_string(),
            name: testimonial.name,
            email: testimonial.email,
            phone: testimonial.phone,
            message: testimonial.message,
            image_url: testimonial.image_url,
            video_url: testimonial.video_url,
            is_approved: testimonial.is_approved,
            created_at: testimonial.created_at,
        }
    }
}
