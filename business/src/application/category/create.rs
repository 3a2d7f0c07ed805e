use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = Category::new(params.name, params.description, params.image_url)?;

        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
            async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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
    async fn should_create_category_when_name_valid() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Soins Visage".to_string(),
                description: Some("Crèmes et sérums pour le visage.".to_string()),
                image_url: None,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Soins Visage");
    }

    #[tokio::test]
    async fn should_reject_category_when_name_empty() {
        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: " ".to_string(),
                description: None,
                image_url: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
