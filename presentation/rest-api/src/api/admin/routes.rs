use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::admin::session::AdminSession;

use crate::api::admin::dto::{LoginRequest, SessionStateResponse};
use crate::api::error::{ErrorResponse, unauthorized};
use crate::api::tags::ApiTags;

/// Admin panel guard. A single shared flag, not per-visitor sessions; the
/// storefront has exactly one admin.
pub struct AdminApi {
    admin_session: Arc<AdminSession>,
}

impl AdminApi {
    pub fn new(admin_session: Arc<AdminSession>) -> Self {
        Self { admin_session }
    }
}

#[OpenApi]
impl AdminApi {
    /// Log in to the admin panel
    #[oai(path = "/admin/login", method = "post", tag = "ApiTags::Admin")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        if self.admin_session.login(&body.0.username, &body.0.password) {
            LoginResponse::Ok(Json(SessionStateResponse {
                authenticated: true,
            }))
        } else {
            LoginResponse::Unauthorized(unauthorized())
        }
    }

    /// Log out of the admin panel
    #[oai(path = "/admin/logout", method = "post", tag = "ApiTags::Admin")]
    async fn logout(&self) -> LogoutResponse {
        self.admin_session.logout();
        LogoutResponse::NoContent
    }

    /// Check whether an admin is logged in
    #[oai(path = "/admin/session", method = "get", tag = "ApiTags::Admin")]
    async fn session(&self) -> SessionResponse {
        SessionResponse::Ok(Json(SessionStateResponse {
            authenticated: self.admin_session.is_authenticated(),
        }))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionStateResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum SessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionStateResponse>),
}
