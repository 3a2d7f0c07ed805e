use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct SetCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartItemQuantityUseCase for SetCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: SetCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {} in cart {}",
            params.product_id, params.quantity, params.session_id
        ));

        let mut cart = self
            .repository
            .get(&params.session_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.session_id));

        cart.set_quantity(params.product_id, params.quantity)?;
        self.repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::SessionId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

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

    fn cart_with_one_item() -> (Cart, Uuid) {
        let product = Product::new(NewProductProps {
            name: "Crème Hydratante".to_string(),
            description: String::new(),
            price: BigDecimal::from_str("32.50").unwrap(),
            category_id: None,
            category_name: None,
            image_url: "https://example.com/creme.jpg".to_string(),
            video_url: None,
        })
        .unwrap();
        let product_id = product.id;
        let mut cart = Cart::empty(SessionId::new("session-1"));
        cart.add_product(&product);
        (cart, product_id)
    }

    #[tokio::test]
    async fn should_set_quantity_of_existing_line() {
        let (cart, product_id) = cart_with_one_item();
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().return_once(move |_| Ok(Some(cart)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = SetCartItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                session_id: SessionId::new("session-1"),
                product_id,
                quantity: 5,
            })
            .await;

        assert_eq!(result.unwrap().total_items(), 5);
    }

    #[tokio::test]
    async fn should_reject_quantity_below_one() {
        let (cart, product_id) = cart_with_one_item();
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().return_once(move |_| Ok(Some(cart)));

        let use_case = SetCartItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                session_id: SessionId::new("session-1"),
                product_id,
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::QuantityInvalid));
    }

    #[tokio::test]
    async fn should_fail_for_product_not_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let use_case = SetCartItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                session_id: SessionId::new("session-1"),
                product_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }
}
