use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::{NewTestimonialProps, Testimonial};
use crate::domain::testimonial::repository::TestimonialRepository;
use crate::domain::testimonial::use_cases::submit::{
    SubmitTestimonialParams, SubmitTestimonialUseCase,
};

pub struct SubmitTestimonialUseCaseImpl {
    pub repository: Arc<dyn TestimonialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitTestimonialUseCase for SubmitTestimonialUseCaseImpl {
    async fn execute(
        &self,
        params: SubmitTestimonialParams,
    ) -> Result<Testimonial, TestimonialError> {
        self.logger
            .info(&format!("New testimonial submission from: {}", params.name));

        let testimonial = Testimonial::new(NewTestimonialProps {
            name: params.name,
            email: params.email,
            phone: params.phone,
            message: params.message,
            image_url: params.image_url,
            video_url: params.video_url,
        })?;

        self.repository.save(&testimonial).await?;

        Ok(testimonial)
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

    fn params() -> SubmitTestimonialParams {
        SubmitTestimonialParams {
            name: "Aminata K.".to_string(),
            email: Some("aminata@example.com".to_string()),
            phone: None,
            message: "Produits de très bonne qualité, livraison rapide !".to_string(),
            image_url: None,
            video_url: None,
        }
    }

    #[tokio::test]
    async fn should_store_submission_unapproved() {
        let mut mock_repo = MockTestimonialRepo::new();
        mock_repo
            .expect_save()
            .withf(|t| !t.is_approved)
            .returning(|_| Ok(()));

        let use_case = SubmitTestimonialUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
        assert!(!result.unwrap().is_approved);
    }

    #[tokio::test]
    async fn should_reject_submission_with_empty_message() {
        let use_case = SubmitTestimonialUseCaseImpl {
            repository: Arc::new(MockTestimonialRepo::new()),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.message = "  ".to_string();

        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), TestimonialError::MessageEmpty));
    }
}
