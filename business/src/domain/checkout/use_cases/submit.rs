use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{OrderForm, OrderSubmission};
use crate::domain::shared::value_objects::SessionId;

pub struct SubmitOrderParams {
    pub session_id: SessionId,
    pub form: OrderForm,
}

#[async_trait]
pub trait SubmitOrderUseCase: Send + Sync {
    /// Validates the form, composes the order message for the session's
    /// cart and returns the WhatsApp deep link. The cart is cleared on
    /// success.
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderSubmission, CheckoutError>;
}
