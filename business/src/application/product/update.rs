use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use num_traits::Zero;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(name) = params.name {
            if name.trim().is_empty() {
                return Err(ProductError::NameEmpty);
            }
            product.name = name;
        }
        if let Some(description) = params.description {
            product.description = description;
        }
        if let Some(price) = params.price {
            if price < BigDecimal::zero() {
                return Err(ProductError::PriceNegative);
            }
            product.price = price;
        }
        if let Some(category_id) = params.category_id {
            // Reassignment re-resolves the denormalized display name.
            match category_id {
                Some(id) => {
                    let category = self
                        .category_repository
                        .get_by_id(id)
                        .await
                        .map_err(|e| match e {
                            RepositoryError::NotFound => ProductError::CategoryNotFound,
                            other => ProductError::Repository(other),
                        })?;
                    product.category_id = Some(id);
                    product.category_name = Some(category.name);
                }
                None => {
                    product.category_id = None;
                    product.category_name = None;
                }
            }
        }
        if let Some(image_url) = params.image_url {
            product.image_url = image_url;
        }
        if let Some(video_url) = params.video_url {
            product.video_url = video_url;
        }

        product.updated_at = Utc::now();
        self.repository.save(&product).await?;

        Ok(product)
    }
}
