use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

/// Filters the full catalog in memory; the catalog is small and the match
/// rules live in the domain, not in SQL.
pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .debug(&format!("Searching products: {:?}", params.query));

        let products = self.repository.get_all().await?;

        Ok(catalog::search(products, &params.query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProductProps;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn count_by_category(&self, category_id: Uuid) -> Result<i64, RepositoryError>;
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

    fn product(name: &str, description: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            description: description.to_string(),
            price: BigDecimal::from_str("20.00").unwrap(),
            category_id: None,
            category_name: None,
            image_url: "https://example.com/p.jpg".to_string(),
            video_url: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_match_case_insensitively_on_name() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                product("Crème Aloe Vera", "Hydratation intense."),
                product("Sérum Vitamine C", "Éclat du teint."),
            ])
        });

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: "ALOE".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Crème Aloe Vera");
    }

    #[tokio::test]
    async fn should_return_full_catalog_for_blank_query() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                product("Crème Aloe Vera", ""),
                product("Sérum Vitamine C", ""),
            ])
        });

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: "   ".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }
}
