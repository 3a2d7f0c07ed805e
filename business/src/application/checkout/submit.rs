use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::message;
use crate::domain::checkout::model::OrderSubmission;
use crate::domain::checkout::use_cases::submit::{SubmitOrderParams, SubmitOrderUseCase};
use crate::domain::logger::Logger;
use crate::domain::settings::repository::SettingsRepository;

pub struct SubmitOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub settings_repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitOrderUseCase for SubmitOrderUseCaseImpl {
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderSubmission, CheckoutError> {
        self.logger.info(&format!(
            "Submitting order for session: {}",
            params.session_id
        ));

        params.form.validate()?;

        let cart = self
            .cart_repository
            .get(&params.session_id)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(CheckoutError::CartEmpty)?;

        let settings = self.settings_repository.load().await?.unwrap_or_default();

        let message = message::order_message(&cart, &params.form);
        let whatsapp_url = message::deep_link(&settings.contact.whatsapp, &message)?;

        // The cart is only cleared once the link was built successfully.
        self.cart_repository.clear(&params.session_id).await?;

        self.logger.info(&format!(
            "Order submitted: {} items for {}",
            cart.total_items(),
            params.session_id
        ));

        Ok(OrderSubmission {
            message,
            whatsapp_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::checkout::model::OrderForm;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::settings::model::SiteSettings;
    use crate::domain::shared::currency::Currency;
    use crate::domain::shared::value_objects::SessionId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub SettingsRepo {}

        #[async_trait]
        impl SettingsRepository for SettingsRepo {
            async fn load(&self) -> Result<Option<SiteSettings>, RepositoryError>;
            async fn save(&self, settings: &SiteSettings) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn form() -> OrderForm {
        OrderForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: None,
            phone: "+33612345678".to_string(),
            address: "12 rue des Lilas".to_string(),
            city: "Paris".to_string(),
            postal_code: Some("75001".to_string()),
            country: "France".to_string(),
            payment_method: "Carte bancaire".to_string(),
            currency: Currency::Eur,
        }
    }

    fn filled_cart() -> Cart {
        let serum = Product::new(NewProductProps {
            name: "Sérum Vitamine C Bio".to_string(),
            description: String::new(),
            price: BigDecimal::from_str("45.00").unwrap(),
            category_id: None,
            category_name: None,
            image_url: "https://example.com/serum.jpg".to_string(),
            video_url: None,
        })
        .unwrap();
        let creme = Product::new(NewProductProps {
            name: "Crème Hydratante Aloe Vera".to_string(),
            description: String::new(),
            price: BigDecimal::from_str("32.50").unwrap(),
            category_id: None,
            category_name: None,
            image_url: "https://example.com/creme.jpg".to_string(),
            video_url: None,
        })
        .unwrap();

        let mut cart = Cart::empty(SessionId::new("checkout-session"));
        cart.add_product(&serum);
        cart.add_product(&creme);
        cart.add_product(&creme);
        cart
    }

    fn settings_repo() -> MockSettingsRepo {
        let mut mock = MockSettingsRepo::new();
        mock.expect_load().returning(|| Ok(None));
        mock
    }

    #[tokio::test]
    async fn should_build_link_and_clear_cart() {
        let mut mock_cart = MockCartRepo::new();
        mock_cart
            .expect_get()
            .return_once(|_| Ok(Some(filled_cart())));
        mock_cart
            .expect_clear()
            .withf(|id| id.as_str() == "checkout-session")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SubmitOrderUseCaseImpl {
            cart_repository: Arc::new(mock_cart),
            settings_repository: Arc::new(settings_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitOrderParams {
                session_id: SessionId::new("checkout-session"),
                form: form(),
            })
            .await;

        assert!(result.is_ok());
        let submission = result.unwrap();
        // Default settings carry the store's WhatsApp number.
        assert!(submission
            .whatsapp_url
            .starts_with("https://wa.me/18103552682?text="));
        assert!(submission.message.contains("💰 *Total : 110.00 €*"));
        assert!(submission
            .message
            .contains("• Crème Hydratante Aloe Vera x2 - 65.00 €"));
    }

    #[tokio::test]
    async fn should_fail_when_cart_empty() {
        let mut mock_cart = MockCartRepo::new();
        mock_cart.expect_get().returning(|_| Ok(None));
        mock_cart.expect_clear().never();

        let use_case = SubmitOrderUseCaseImpl {
            cart_repository: Arc::new(mock_cart),
            settings_repository: Arc::new(settings_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitOrderParams {
                session_id: SessionId::new("checkout-session"),
                form: form(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::CartEmpty));
    }

    #[tokio::test]
    async fn should_fail_before_any_side_effect_on_invalid_form() {
        let mock_cart = MockCartRepo::new();

        let use_case = SubmitOrderUseCaseImpl {
            cart_repository: Arc::new(mock_cart),
            settings_repository: Arc::new(MockSettingsRepo::new()),
            logger: mock_logger(),
        };

        let mut invalid = form();
        invalid.phone = String::new();

        let result = use_case
            .execute(SubmitOrderParams {
                session_id: SessionId::new("checkout-session"),
                form: invalid,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::MissingField("phone")
        ));
    }
}
