use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::MissingField(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.missing_required_field",
            ),
            CheckoutError::CartEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError", "checkout.cart_empty")
            }
            // A destination that yields no digits means the configured
            // WhatsApp number is broken, not the request.
            CheckoutError::DestinationInvalid => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "checkout.destination_invalid",
            ),
            CheckoutError::Repository(_) => (
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
