use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body of the 401 returned by admin-gated endpoints.
pub fn unauthorized() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Unauthorized".to_string(),
        message: "admin.unauthorized".to_string(),
    })
}

pub fn validation_error(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}
