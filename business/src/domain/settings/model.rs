use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::errors::SettingsError;

/// Version of the persisted settings shape. The repository treats a stored
/// blob with a different version as absent, so a schema change resets the
/// site to defaults instead of loading an incompatible record.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
}

/// Partial contact update; only provided fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct ContactInfoPatch {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Singleton site configuration: contact details, social links and the
/// payment-method labels offered at checkout. Mutated only from the admin
/// panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub contact: ContactInfo,
    pub social_links: Vec<SocialLink>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl Default for SiteSettings {
    /// Static storefront defaults, used until the first persisted mutation.
    fn default() -> Self {
        Self {
            contact: ContactInfo {
                phone: "+18103552682".to_string(),
                email: "mirakosmetics@gmail.com".to_string(),
                address: "123 Rue de la Beauté, 75001 Paris, France".to_string(),
                whatsapp: "+18103552682".to_string(),
            },
            social_links: vec![
                SocialLink {
                    id: Uuid::new_v4(),
                    platform: "Facebook".to_string(),
                    url: "https://facebook.com".to_string(),
                    icon: "Facebook".to_string(),
                },
                SocialLink {
                    id: Uuid::new_v4(),
                    platform: "Instagram".to_string(),
                    url: "https://instagram.com".to_string(),
                    icon: "Instagram".to_string(),
                },
                SocialLink {
                    id: Uuid::new_v4(),
                    platform: "Twitter".to_string(),
                    url: "https://twitter.com".to_string(),
                    icon: "Twitter".to_string(),
                },
            ],
            payment_methods: vec![
                PaymentMethod {
                    id: Uuid::new_v4(),
                    name: "Mobile Money".to_string(),
                    description: Some("Paiement via mobile money".to_string()),
                },
                PaymentMethod {
                    id: Uuid::new_v4(),
                    name: "Virement bancaire".to_string(),
                    description: Some("Virement bancaire sécurisé".to_string()),
                },
                PaymentMethod {
                    id: Uuid::new_v4(),
                    name: "Espèces à la livraison".to_string(),
                    description: Some("Paiement en liquide".to_string()),
                },
                PaymentMethod {
                    id: Uuid::new_v4(),
                    name: "Carte bancaire".to_string(),
                    description: Some("Paiement par carte".to_string()),
                },
            ],
        }
    }
}

impl SiteSettings {
    pub fn merge_contact(&mut self, patch: ContactInfoPatch) {
        if let Some(phone) = patch.phone {
            self.contact.phone = phone;
        }
        if let Some(email) = patch.email {
            self.contact.email = email;
        }
        if let Some(address) = patch.address {
            self.contact.address = address;
        }
        if let Some(whatsapp) = patch.whatsapp {
            self.contact.whatsapp = whatsapp;
        }
    }

    /// Appends a social link with a fresh id.
    pub fn add_social_link(
        &mut self,
        platform: String,
        url: String,
        icon: String,
    ) -> Result<SocialLink, SettingsError> {
        if platform.trim().is_empty() {
            return Err(SettingsError::PlatformEmpty);
        }

        if Url::parse(&url).is_err() {
            return Err(SettingsError::UrlInvalid);
        }

        let link = SocialLink {
            id: Uuid::new_v4(),
            platform,
            url,
            icon,
        };
        self.social_links.push(link.clone());
        Ok(link)
    }

    /// Silent no-op when the id is absent, matching the admin panel's
    /// filter-style removal.
    pub fn remove_social_link(&mut self, id: Uuid) {
        self.social_links.retain(|l| l.id != id);
    }

    pub fn add_payment_method(
        &mut self,
        name: String,
        description: Option<String>,
    ) -> Result<PaymentMethod, SettingsError> {
        if name.trim().is_empty() {
            return Err(SettingsError::PaymentNameEmpty);
        }

        let method = PaymentMethod {
            id: Uuid::new_v4(),
            name,
            description,
        };
        self.payment_methods.push(method.clone());
        Ok(method)
    }

    pub fn remove_payment_method(&mut self, id: Uuid) {
        self.payment_methods.retain(|m| m.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_default_payment_methods() {
        let settings = SiteSettings::default();

        assert_eq!(settings.payment_methods.len(), 4);
        assert_eq!(settings.payment_methods[0].name, "Mobile Money");
    }

    #[test]
    fn should_merge_only_provided_contact_fields() {
        let mut settings = SiteSettings::default();

        settings.merge_contact(ContactInfoPatch {
            phone: Some("+33612345678".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.contact.phone, "+33612345678");
        assert_eq!(settings.contact.email, "mirakosmetics@gmail.com");
    }

    #[test]
    fn should_add_social_link_with_fresh_id() {
        let mut settings = SiteSettings::default();

        let link = settings
            .add_social_link(
                "TikTok".to_string(),
                "https://tiktok.com/@houseofbeauty".to_string(),
                "TikTok".to_string(),
            )
            .unwrap();

        assert_eq!(settings.social_links.len(), 4);
        assert_eq!(settings.social_links.last().unwrap().id, link.id);
    }

    #[test]
    fn should_reject_social_link_with_invalid_url() {
        let mut settings = SiteSettings::default();

        let result =
            settings.add_social_link("TikTok".to_string(), "not a url".to_string(), String::new());

        assert!(matches!(result.unwrap_err(), SettingsError::UrlInvalid));
    }

    #[test]
    fn should_reject_social_link_with_empty_platform() {
        let mut settings = SiteSettings::default();

        let result = settings.add_social_link(
            " ".to_string(),
            "https://tiktok.com".to_string(),
            String::new(),
        );

        assert!(matches!(result.unwrap_err(), SettingsError::PlatformEmpty));
    }

    #[test]
    fn should_remove_social_link_by_id() {
        let mut settings = SiteSettings::default();
        let id = settings.social_links[0].id;

        settings.remove_social_link(id);

        assert_eq!(settings.social_links.len(), 2);
        assert!(settings.social_links.iter().all(|l| l.id != id));
    }

    #[test]
    fn should_ignore_removal_of_unknown_payment_method() {
        let mut settings = SiteSettings::default();

        settings.remove_payment_method(Uuid::new_v4());

        assert_eq!(settings.payment_methods.len(), 4);
    }

    #[test]
    fn should_reject_payment_method_with_empty_name() {
        let mut settings = SiteSettings::default();

        let result = settings.add_payment_method("".to_string(), None);

        assert!(matches!(result.unwrap_err(), SettingsError::PaymentNameEmpty));
    }
}
