use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::TestimonialError;

/// A customer review. Only approved testimonials appear on public pages;
/// the admin view lists all of them.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewTestimonialProps {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl Testimonial {
    /// Public submissions always start unapproved.
    pub fn new(props: NewTestimonialProps) -> Result<Self, TestimonialError> {
        if props.name.trim().is_empty() {
            return Err(TestimonialError::NameEmpty);
        }

        if props.message.trim().is_empty() {
            return Err(TestimonialError::MessageEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            email: props.email,
            phone: props.phone,
            message: props.message,
            image_url: props.image_url,
            video_url: props.video_url,
            is_approved: false,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        message: String,
        image_url: Option<String>,
        video_url: Option<String>,
        is_approved: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            message,
            image_url,
            video_url,
            is_approved,
            created_at,
        }
    }
}
