use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::testimonial::errors::TestimonialError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TestimonialError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TestimonialError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "testimonial.name_empty",
            ),
            TestimonialError::MessageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "testimonial.message_empty",
            ),
            TestimonialError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "testimonial.not_found")
            }
            TestimonialError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
