use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct SessionStateResponse {
    pub authenticated: bool,
}
