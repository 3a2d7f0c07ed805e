use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Fetching cart for session: {}", params.session_id));

        let cart = self
            .repository
            .get(&params.session_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.session_id));

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

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
    async fn should_return_empty_cart_for_unknown_session() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                session_id: SessionId::new("fresh-session"),
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.session_id.as_str(), "fresh-session");
    }

    #[tokio::test]
    async fn should_return_stored_cart_when_present() {
        let session_id = SessionId::new("returning-session");
        let stored = Cart::empty(session_id.clone());
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .withf(move |id| id.as_str() == "returning-session")
            .return_once(move |_| Ok(Some(stored)));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetCartParams { session_id }).await;

        assert!(result.is_ok());
    }
}
