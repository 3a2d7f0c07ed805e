use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::testimonial::model::Testimonial;

#[derive(Debug, FromRow)]
pub struct TestimonialEntity {
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

impl TestimonialEntity {
    pub fn into_domain(self) -> Testimonial {
        Testimonial::from_repository(
            self.id,
            self.name,
            self.email,
            self.phone,
            self.message,
            self.image_url,
            self.video_url,
            self.is_approved,
            self.created_at,
        )
    }
}
