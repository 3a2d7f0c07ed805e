use poem_openapi::Object;

use business::domain::checkout::model::OrderSubmission;

#[derive(Debug, Clone, Object)]
pub struct SubmitOrderRequest {
    pub first_name: String,
    pub last_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[oai(skip_serializing_if_is_none)]
    pub postal_code: Option<String>,
    pub country: String,
    /// Display label of the chosen payment method
    pub payment_method: String,
    /// Currency code used to format prices in the order message
    /// ("EUR", "USD" or "XOF")
    pub currency: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderSubmissionResponse {
    /// The composed order message, as plain text
    pub message: String,
    /// WhatsApp deep link carrying the percent-encoded message
    pub whatsapp_url: String,
}

impl From<OrderSubmission> for OrderSubmissionResponse {
    fn from(submission: OrderSubmission) -> Self {
        Self {
            message: submission.message,
            whatsapp_url: submission.whatsapp_url,
        }
    }
}
