use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::SessionId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, SetCartItemQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, validation_error};
use crate::api::tags::ApiTags;

/// Session-keyed cart API. No authentication: the session id in the path is
/// the only handle a visitor has on their cart.
pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            set_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

#[OpenApi]
impl CartApi {
    /// Get the session's cart
    ///
    /// Always succeeds for a well-formed session id; a session that never
    /// added anything gets an empty cart.
    #[oai(path = "/cart/:session_id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session_id: Path<String>) -> CartOperationResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                session_id: SessionId::new(session_id.0),
            })
            .await
        {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartOperationResponse::InternalError(json)
            }
        }
    }

    /// Add one unit of a product to the cart
    ///
    /// Adding a product already in the cart increments its line quantity.
    #[oai(
        path = "/cart/:session_id/items",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_item(
        &self,
        session_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> CartMutationResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartMutationResponse::BadRequest(validation_error("product.invalid_id"));
            }
        };

        match self
            .add_item_use_case
            .execute(AddCartItemParams {
                session_id: SessionId::new(session_id.0),
                product_id,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the quantity of a cart line
    ///
    /// Quantities below 1 are rejected; removing a line goes through the
    /// DELETE endpoint instead.
    #[oai(
        path = "/cart/:session_id/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn set_quantity(
        &self,
        session_id: Path<String>,
        product_id: Path<String>,
        body: Json<SetCartItemQuantityRequest>,
    ) -> CartMutationResponse {
        let product_id = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartMutationResponse::BadRequest(validation_error("product.invalid_id"));
            }
        };

        match self
            .set_quantity_use_case
            .execute(SetCartItemQuantityParams {
                session_id: SessionId::new(session_id.0),
                product_id,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a line from the cart
    ///
    /// Removing a product that is not in the cart is a no-op.
    #[oai(
        path = "/cart/:session_id/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        session_id: Path<String>,
        product_id: Path<String>,
    ) -> CartMutationResponse {
        let product_id = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartMutationResponse::BadRequest(validation_error("product.invalid_id"));
            }
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::new(session_id.0),
                product_id,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the session's cart
    #[oai(path = "/cart/:session_id", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, session_id: Path<String>) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                session_id: SessionId::new(session_id.0),
            })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOperationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
