use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::admin::session::AdminSession;
use business::domain::category::use_cases::create::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::category::use_cases::delete::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::update::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, unauthorized, validation_error};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    admin_session: Arc<AdminSession>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
        admin_session: Arc<AdminSession>,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            admin_session,
        }
    }
}

#[OpenApi]
impl CategoryApi {
    /// List all categories with their product counts
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => {
                let responses: Vec<CategoryResponse> =
                    categories.into_iter().map(|c| c.into()).collect();
                GetAllCategoriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Create a new category (admin)
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(&self, body: Json<CreateCategoryRequest>) -> CreateCategoryResponse {
        if !self.admin_session.is_authenticated() {
            return CreateCategoryResponse::Unauthorized(unauthorized());
        }

        let params = CreateCategoryParams {
            name: body.0.name,
            description: body.0.description,
            image_url: body.0.image_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a category (admin)
    ///
    /// Partial update; only provided fields overwrite.
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        if !self.admin_session.is_authenticated() {
            return UpdateCategoryResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCategoryResponse::BadRequest(validation_error("category.invalid_id"));
            }
        };

        let params = UpdateCategoryParams {
            id: uuid,
            name: body.0.name,
            description: clearable(body.0.description),
            image_url: clearable(body.0.image_url),
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category (admin)
    ///
    /// Refused with 409 while products still reference the category.
    #[oai(
        path = "/categories/:id",
        method = "delete",
        tag = "ApiTags::Categories"
    )]
    async fn delete_category(&self, id: Path<String>) -> DeleteCategoryResponse {
        if !self.admin_session.is_authenticated() {
            return DeleteCategoryResponse::Unauthorized(unauthorized());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteCategoryResponse::BadRequest(validation_error("category.invalid_id"));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: uuid })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

/// Maps the wire convention for clearable text fields: absent keeps the
/// stored value, empty string clears it.
fn clearable(field: Option<String>) -> Option<Option<String>> {
    match field.as_deref() {
        None => None,
        Some("") => Some(None),
        Some(value) => Some(Some(value.to_string())),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
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
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
