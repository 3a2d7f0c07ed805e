use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let mut category = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        if let Some(name) = params.name {
            if name.trim().is_empty() {
                return Err(CategoryError::NameEmpty);
            }
            category.name = name;
        }
        if let Some(description) = params.description {
            category.description = description;
        }
        if let Some(image_url) = params.image_url {
            category.image_url = image_url;
        }

        self.repository.save(&category).await?;

        Ok(category)
    }
}
