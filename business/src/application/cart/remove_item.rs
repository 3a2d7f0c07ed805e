use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.session_id
        ));

        let mut cart = self
            .repository
            .get(&params.session_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.session_id));

        cart.remove_item(params.product_id);
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

    #[tokio::test]
    async fn should_remove_line_regardless_of_quantity() {
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

        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().return_once(move |_| {
            let mut cart = Cart::empty(SessionId::new("session-1"));
            cart.add_product(&product);
            cart.add_product(&product);
            cart.add_product(&product);
            Ok(Some(cart))
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::new("session-1"),
                product_id,
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_no_op_when_product_absent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                session_id: SessionId::new("session-1"),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
