use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::admin::session::AdminSession;
use business::domain::testimonial::use_cases::delete::{
    DeleteTestimonialParams, DeleteTestimonialUseCase,
};
use business::domain::testimonial::use_cases::get_all::GetAllTestimonialsUseCase;
use business::domain::testimonial::use_cases::get_approved::GetApprovedTestimonialsUseCase;
use business::domain::testimonial::use_cases::set_approval::{
    SetTestimonialApprovalParams, SetTestimonialApprovalUseCase,
};
use business::domain::testimonial::use_cases::submit::{
    SubmitTestimonialParams, SubmitTestimonialUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, unauthorized, validation_error};
use crate::api::tags::ApiTags;
use crate::api::testimonial::dto::{
    SetApprovalRequest, SubmitTestimonialRequest, TestimonialResponse,
};

pub struct TestimonialApi {
    submit_use_case: Arc<dyn SubmitTestimonialUseCase>,
    get_approved_use_case: Arc<dyn GetApprovedTestimonialsUseCase>,
    get_all_use_case: Arc<dyn GetAllTestimonialsUseCase>,
    set_approval_use_case: Arc<dyn SetTestimonialApprovalUseCase>,
    delete_use_case: Arc<dyn DeleteTestimonialUseCase>,
    admin_session: Arc<AdminSession>,
}

impl TestimonialApi {
    pub fn new(
        submit_use_case: Arc<dyn SubmitTestimonialUseCase>,
        get_approved_use_case: Arc<dyn GetApprovedTestimonialsUseCase>,
        get_all_use_case: Arc<dyn GetAllTestimonialsUseCase>,
        set_approval_use_case: Arc<dyn SetTestimonialApprovalUseCase>,
        delete_use_case: Arc<dyn DeleteTestimonialUseCase>,
        admin_session: Arc<AdminSession>,
    ) -> Self {
        Self {
            submit_use_case,
            get_approved_use_case,
            get_all_use_case,
            set_approval_use_case,
            delete_use_case,
            admin_session,
        }
    }
}

#[OpenApi]
impl TestimonialApi {
    /// Submit a testimonial
    ///
    /// Public endpoint; the review stays hidden until an admin approves it.
    #[oai(
        path = "/testimonials",
        method = "post",
        tag = "ApiTags::Testimonials"
    )]
    async fn submit_testimonial(
        &self,
        body: Json<SubmitTestimonialRequest>,
    ) -> SubmitTestimonialResponse {
        let params = SubmitTestimonialParams {
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            message: body.0.message,
            image_url: body.0.image_url,
            video_url: body.0.video_url,
        };

        match self.submit_use_case.execute(params).await {
            Ok(testimonial) => SubmitTestimonialResponse::Created(Json(testimonial.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitTestimonialResponse::BadRequest(json),
                    _ => SubmitTestimonialResponse::InternalError(json),
                }
            }
        }
    }

    /// List approved testimonials
    #[oai(path = "/testimonials", method = "get", tag = "ApiTags::Testimonials")]
    async fn get_approved_testimonials(&self) -> ListTestimonialsResponse {
        match self.get_approved_use_case.execute().await {
            Ok(testimonials) => {
                let responses: Vec<TestimonialResponse> =
                    testimonials.into_iter().map(|t| t.into()).collect();
                ListTestimonialsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListTestimonialsResponse::InternalError(json)
            }
        }
    }

    /// List all testimonials, approved or not (admin)
    #[oai(
        path = "/testimonials/all",
        method = "get",
        tag = "ApiTags::Testimonials"
    )]
    async fn get_all_testimonials(&self) -> ListAllTestimonialsResponse {
        if !self.admin_session.is_authenticated() {
            return ListAllTestimonialsResponse::Unauthorized(unauthorized());
        }

        match self.get_all_use_case.execute().await {
            Ok(testimonials) => {
                let responses: Vec<TestimonialResponse> =
                    testimonials.into_iter().map(|t| t.into()).collect();
                ListAllTestimonialsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListAllTestimonialsResponse::InternalError(json)
            }
        }
    }

    /// Approve or revoke a testimonial (admin)
    #[oai(
        path = "/testimonials/:id/approval",
        method = "put",
        tag = "ApiTags::Testimonials"
    )]
    async fn set_approval(
        &self,
        id: Path<String>,
        body: Json<SetApprovalRequest>,
    ) -> SetApprovalResponse {
        if !self.admin_session.is_authenticated() {
            return SetApprovalResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return SetApprovalResponse::BadRequest(validation_error("testimonial.invalid_id"));
            }
        };

        match self
            .set_approval_use_case
            .execute(SetTestimonialApprovalParams {
                id: uuid,
                is_approved: body.0.is_approved,
            })
            .await
        {
            Ok(testimonial) => SetApprovalResponse::Ok(Json(testimonial.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SetApprovalResponse::NotFound(json),
                    _ => SetApprovalResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a testimonial (admin)
    #[oai(
        path = "/testimonials/:id",
        method = "delete",
        tag = "ApiTags::Testimonials"
    )]
    async fn delete_testimonial(&self, id: Path<String>) -> DeleteTestimonialResponse {
        if !self.admin_session.is_authenticated() {
            return DeleteTestimonialResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteTestimonialResponse::BadRequest(validation_error(
                    "testimonial.invalid_id",
                ));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteTestimonialParams { id: uuid })
            .await
        {
            Ok(()) => DeleteTestimonialResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteTestimonialResponse::NotFound(json),
                    _ => DeleteTestimonialResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitTestimonialResponse {
    #[oai(status = 201)]
    Created(Json<TestimonialResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListTestimonialsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TestimonialResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListAllTestimonialsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TestimonialResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetApprovalResponse {
    #[oai(status = 200)]
    Ok(Json<TestimonialResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTestimonialResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
