use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::admin::session::AdminSession;
use business::domain::settings::model::ContactInfoPatch;
use business::domain::settings::use_cases::add_payment_method::{
    AddPaymentMethodParams, AddPaymentMethodUseCase,
};
use business::domain::settings::use_cases::add_social_link::{
    AddSocialLinkParams, AddSocialLinkUseCase,
};
use business::domain::settings::use_cases::get::GetSiteSettingsUseCase;
use business::domain::settings::use_cases::remove_payment_method::{
    RemovePaymentMethodParams, RemovePaymentMethodUseCase,
};
use business::domain::settings::use_cases::remove_social_link::{
    RemoveSocialLinkParams, RemoveSocialLinkUseCase,
};
use business::domain::settings::use_cases::update_contact::UpdateContactInfoUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse, unauthorized, validation_error};
use crate::api::settings::dto::{
    AddPaymentMethodRequest, AddSocialLinkRequest, PaymentMethodResponse, SiteSettingsResponse,
    SocialLinkResponse, UpdateContactRequest,
};
use crate::api::tags::ApiTags;

pub struct SettingsApi {
    get_use_case: Arc<dyn GetSiteSettingsUseCase>,
    update_contact_use_case: Arc<dyn UpdateContactInfoUseCase>,
    add_social_link_use_case: Arc<dyn AddSocialLinkUseCase>,
    remove_social_link_use_case: Arc<dyn RemoveSocialLinkUseCase>,
    add_payment_method_use_case: Arc<dyn AddPaymentMethodUseCase>,
    remove_payment_method_use_case: Arc<dyn RemovePaymentMethodUseCase>,
    admin_session: Arc<AdminSession>,
}

impl SettingsApi {
    pub fn new(
        get_use_case: Arc<dyn GetSiteSettingsUseCase>,
        update_contact_use_case: Arc<dyn UpdateContactInfoUseCase>,
        add_social_link_use_case: Arc<dyn AddSocialLinkUseCase>,
        remove_social_link_use_case: Arc<dyn RemoveSocialLinkUseCase>,
        add_payment_method_use_case: Arc<dyn AddPaymentMethodUseCase>,
        remove_payment_method_use_case: Arc<dyn RemovePaymentMethodUseCase>,
        admin_session: Arc<AdminSession>,
    ) -> Self {
        Self {
            get_use_case,
            update_contact_use_case,
            add_social_link_use_case,
            remove_social_link_use_case,
            add_payment_method_use_case,
            remove_payment_method_use_case,
            admin_session,
        }
    }
}

#[OpenApi]
impl SettingsApi {
    /// Get the site settings
    ///
    /// Returns the storefront defaults until an admin persists a change.
    #[oai(path = "/settings", method = "get", tag = "ApiTags::Settings")]
    async fn get_settings(&self) -> GetSettingsResponse {
        match self.get_use_case.execute().await {
            Ok(settings) => GetSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSettingsResponse::InternalError(json)
            }
        }
    }

    /// Update contact details (admin)
    ///
    /// Partial update; only provided fields overwrite.
    #[oai(
        path = "/settings/contact",
        method = "patch",
        tag = "ApiTags::Settings"
    )]
    async fn update_contact(&self, body: Json<UpdateContactRequest>) -> UpdateSettingsResponse {
        if !self.admin_session.is_authenticated() {
            return UpdateSettingsResponse::Unauthorized(unauthorized());
        }

        let patch = ContactInfoPatch {
            phone: body.0.phone,
            email: body.0.email,
            address: body.0.address,
            whatsapp: body.0.whatsapp,
        };

        match self.update_contact_use_case.execute(patch).await {
            Ok(settings) => UpdateSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateSettingsResponse::BadRequest(json),
                    _ => UpdateSettingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a social link (admin)
    #[oai(
        path = "/settings/social-links",
        method = "post",
        tag = "ApiTags::Settings"
    )]
    async fn add_social_link(&self, body: Json<AddSocialLinkRequest>) -> AddSocialLinkResponse {
        if !self.admin_session.is_authenticated() {
            return AddSocialLinkResponse::Unauthorized(unauthorized());
        }

        let params = AddSocialLinkParams {
            platform: body.0.platform,
            url: body.0.url,
            icon: body.0.icon,
        };

        match self.add_social_link_use_case.execute(params).await {
            Ok(link) => AddSocialLinkResponse::Created(Json(link.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddSocialLinkResponse::BadRequest(json),
                    _ => AddSocialLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a social link (admin)
    ///
    /// Removing an unknown id is a no-op.
    #[oai(
        path = "/settings/social-links/:id",
        method = "delete",
        tag = "ApiTags::Settings"
    )]
    async fn remove_social_link(&self, id: Path<String>) -> RemoveSettingsEntryResponse {
        if !self.admin_session.is_authenticated() {
            return RemoveSettingsEntryResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveSettingsEntryResponse::BadRequest(validation_error(
                    "settings.invalid_id",
                ));
            }
        };

        match self
            .remove_social_link_use_case
            .execute(RemoveSocialLinkParams { id: uuid })
            .await
        {
            Ok(()) => RemoveSettingsEntryResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveSettingsEntryResponse::InternalError(json)
            }
        }
    }

    /// Add a payment method (admin)
    #[oai(
        path = "/settings/payment-methods",
        method = "post",
        tag = "ApiTags::Settings"
    )]
    async fn add_payment_method(
        &self,
        body: Json<AddPaymentMethodRequest>,
    ) -> AddPaymentMethodResponse {
        if !self.admin_session.is_authenticated() {
            return AddPaymentMethodResponse::Unauthorized(unauthorized());
        }

        let params = AddPaymentMethodParams {
            name: body.0.name,
            description: body.0.description,
        };

        match self.add_payment_method_use_case.execute(params).await {
            Ok(method) => AddPaymentMethodResponse::Created(Json(method.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddPaymentMethodResponse::BadRequest(json),
                    _ => AddPaymentMethodResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a payment method (admin)
    ///
    /// Removing an unknown id is a no-op.
    #[oai(
        path = "/settings/payment-methods/:id",
        method = "delete",
        tag = "ApiTags::Settings"
    )]
    async fn remove_payment_method(&self, id: Path<String>) -> RemoveSettingsEntryResponse {
        if !self.admin_session.is_authenticated() {
            return RemoveSettingsEntryResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveSettingsEntryResponse::BadRequest(validation_error(
                    "settings.invalid_id",
                ));
            }
        };

        match self
            .remove_payment_method_use_case
            .execute(RemovePaymentMethodParams { id: uuid })
            .await
        {
            Ok(()) => RemoveSettingsEntryResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveSettingsEntryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<SiteSettingsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<SiteSettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddSocialLinkResponse {
    #[oai(status = 201)]
    Created(Json<SocialLinkResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddPaymentMethodResponse {
    #[oai(status = 201)]
    Created(Json<PaymentMethodResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveSettingsEntryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
