use std::str::FromStr;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::checkout::model::OrderForm;
use business::domain::checkout::use_cases::submit::{SubmitOrderParams, SubmitOrderUseCase};
use business::domain::shared::currency::Currency;
use business::domain::shared::value_objects::SessionId;

use crate::api::checkout::dto::{OrderSubmissionResponse, SubmitOrderRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, validation_error};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    submit_use_case: Arc<dyn SubmitOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(submit_use_case: Arc<dyn SubmitOrderUseCase>) -> Self {
        Self { submit_use_case }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Submit an order
    ///
    /// Composes the order message for the session's cart and returns the
    /// WhatsApp deep link the storefront opens. The cart is emptied on
    /// success; a rejected form or an empty cart leaves it untouched.
    #[oai(
        path = "/checkout/:session_id",
        method = "post",
        tag = "ApiTags::Checkout"
    )]
    async fn submit_order(
        &self,
        session_id: Path<String>,
        body: Json<SubmitOrderRequest>,
    ) -> SubmitOrderResponse {
        let currency = match Currency::from_str(&body.0.currency) {
            Ok(currency) => currency,
            Err(_) => {
                return SubmitOrderResponse::BadRequest(validation_error("checkout.currency_invalid"));
            }
        };

        let form = OrderForm {
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            email: body.0.email,
            phone: body.0.phone,
            address: body.0.address,
            city: body.0.city,
            postal_code: body.0.postal_code,
            country: body.0.country,
            payment_method: body.0.payment_method,
            currency,
        };

        match self
            .submit_use_case
            .execute(SubmitOrderParams {
                session_id: SessionId::new(session_id.0),
                form,
            })
            .await
        {
            Ok(submission) => SubmitOrderResponse::Ok(Json(submission.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitOrderResponse::BadRequest(json),
                    _ => SubmitOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderSubmissionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
