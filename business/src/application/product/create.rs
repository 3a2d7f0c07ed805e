use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        // The display name is denormalized onto the product at write time.
        let category_name = match params.category_id {
            Some(category_id) => {
                let category = self
                    .category_repository
                    .get_by_id(category_id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => ProductError::CategoryNotFound,
                        other => ProductError::Repository(other),
                    })?;
                Some(category.name)
            }
            None => None,
        };

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            category_id: params.category_id,
            category_name,
            image_url: params.image_url,
            video_url: params.video_url,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
