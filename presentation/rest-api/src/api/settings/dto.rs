use poem_openapi::Object;

use business::domain::settings::model::{
    ContactInfo, PaymentMethod, SiteSettings, SocialLink,
};

/// Partial contact update: absent fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateContactRequest {
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AddSocialLinkRequest {
    /// Platform name, e.g. "Instagram" (cannot be empty)
    pub platform: String,
    /// Link target (must be an absolute URL)
    pub url: String,
    /// Icon identifier used by the storefront
    pub icon: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddPaymentMethodRequest {
    /// Method label shown at checkout (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ContactInfoResponse {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(contact: ContactInfo) -> Self {
        Self {
            phone: contact.phone,
            email: contact.email,
            address: contact.address,
            whatsapp: contact.whatsapp,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SocialLinkResponse {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub icon: String,
}

impl From<SocialLink> for SocialLinkResponse {
    fn from(link: SocialLink) -> Self {
        Self {
            id: link.id.to_string(),
            platform: link.platform,
            url: link.url,
            icon: link.icon,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaymentMethodResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(method: PaymentMethod) -> Self {
        Self {
            id: method.id.to_string(),
            name: method.name,
            description: method.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SiteSettingsResponse {
    pub contact: ContactInfoResponse,
    pub social_links: Vec<SocialLinkResponse>,
    pub payment_methods: Vec<PaymentMethodResponse>,
}

impl From<SiteSettings> for SiteSettingsResponse {
    fn from(settings: SiteSettings) -> Self {
        Self {
            contact: settings.contact.into(),
            social_links: settings
                .social_links
                .into_iter()
                .map(|l| l.into())
                .collect(),
            payment_methods: settings
                .payment_methods
                .into_iter()
                .map(|m| m.into())
                .collect(),
        }
    }
}
