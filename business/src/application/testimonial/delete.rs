use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::repository::TestimonialRepository;
use crate::domain::testimonial::use_cases::delete::{
    DeleteTestimonialParams, DeleteTestimonialUseCase,
};

pub struct DeleteTestimonialUseCaseImpl {
    pub repository: Arc<dyn TestimonialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteTestimonialUseCase for DeleteTestimonialUseCaseImpl {
    async fn execute(&self, params: DeleteTestimonialParams) -> Result<(), TestimonialError> {
        self.logger
            .info(&format!("Deleting testimonial: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => TestimonialError::NotFound,
                other => TestimonialError::Repository(other),
            })?;

        Ok(())
    }
}
