use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;
use crate::domain::testimonial::repository::TestimonialRepository;
use crate::domain::testimonial::use_cases::get_all::GetAllTestimonialsUseCase;

/// Admin listing; includes unapproved submissions.
pub struct GetAllTestimonialsUseCaseImpl {
    pub repository: Arc<dyn TestimonialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllTestimonialsUseCase for GetAllTestimonialsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Testimonial>, TestimonialError> {
        self.logger.debug("Fetching all testimonials");

        let testimonials = self.repository.get_all().await?;

        Ok(testimonials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub TestimonialRepo {}

        #[async_trait]
        impl TestimonialRepository for TestimonialRepo {
            async fn get_all(&self) -> Result<Vec<Testimonial>, RepositoryError>;
            async fn get_approved(&self) -> Result<Vec<Testimonial>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Testimonial, RepositoryError>;
            async fn save(&self, testimonial: &Testimonial) -> Result<(), RepositoryError>;
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
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockTestimonialRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllTestimonialsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            TestimonialError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
