//! Order message composition and the WhatsApp deep link.
//!
//! Pure string construction; the HTTP layer returns the link to the
//! storefront, which opens it in a new browsing context. No network call
//! happens here.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::domain::cart::model::Cart;

use super::errors::CheckoutError;
use super::model::OrderForm;

/// Everything except RFC 3986 unreserved characters is percent-encoded,
/// mirroring `encodeURIComponent` in the storefront.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Composes the order text sent over WhatsApp: customer block, one line
/// per cart item with its formatted subtotal, the formatted total, the
/// shipping address and the chosen payment method.
pub fn order_message(cart: &Cart, form: &OrderForm) -> String {
    let currency = form.currency;

    let order_details = cart
        .items
        .iter()
        .map(|item| {
            format!(
                "• {} x{} - {}",
                item.name,
                item.quantity,
                currency.format(&item.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut message = String::new();
    message.push_str("🛍️ *NOUVELLE COMMANDE - HOUSE OF BEAUTY*\n\n");
    message.push_str("👤 *Informations client :*\n");
    message.push_str(&format!("Nom : {} {}\n", form.first_name, form.last_name));
    if let Some(email) = &form.email {
        message.push_str(&format!("Email : {}\n", email));
    }
    message.push_str(&format!("Téléphone : {}\n\n", form.phone));
    message.push_str("📦 *Produits commandés :*\n");
    message.push_str(&order_details);
    message.push_str(&format!(
        "\n\n💰 *Total : {}*\n\n",
        currency.format(&cart.total_price())
    ));
    message.push_str("📍 *Adresse de livraison :*\n");
    message.push_str(&format!("{}\n", form.address));
    match &form.postal_code {
        Some(postal) => message.push_str(&format!("{}, {}\n", form.city, postal)),
        None => message.push_str(&format!("{}\n", form.city)),
    }
    message.push_str(&format!("{}\n\n", form.country));
    message.push_str(&format!(
        "💳 *Moyen de paiement souhaité :* {}\n\n",
        form.payment_method
    ));
    message.push_str("Merci de confirmer cette commande !");

    message
}

/// Builds `https://wa.me/<digits>?text=<percent-encoded message>` for the
/// configured destination number. Non-digit characters in the number are
/// stripped; a number with no digits is rejected.
pub fn deep_link(whatsapp_number: &str, message: &str) -> Result<String, CheckoutError> {
    let digits: String = whatsapp_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(CheckoutError::DestinationInvalid);
    }

    let encoded = utf8_percent_encode(message, MESSAGE_ENCODE_SET);
    let url = format!("{}{}?text={}", WHATSAPP_BASE, digits, encoded);

    // The encode set keeps the result parseable; this guards the template
    // itself rather than the inputs.
    Url::parse(&url).map_err(|_| CheckoutError::DestinationInvalid)?;

    Ok(url)
}
