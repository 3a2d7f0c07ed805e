use crate::domain::shared::currency::Currency;

use super::errors::CheckoutError;

/// Customer-entered order form. Validated as a whole before the order
/// message is built; a missing required field aborts the submission with
/// no side effect.
#[derive(Debug, Clone)]
pub struct OrderForm {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub country: String,
    /// Display label of the chosen payment method.
    pub payment_method: String,
    /// Currency used to format prices in the order message.
    pub currency: Currency,
}

impl OrderForm {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required: [(&'static str, &str); 7] = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("country", &self.country),
            ("payment_method", &self.payment_method),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(field));
            }
        }

        Ok(())
    }
}

/// Result of a checkout submission: the composed order text and the
/// messaging deep link the storefront opens in a new browsing context.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    pub message: String,
    pub whatsapp_url: String,
}
