use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;
use crate::domain::testimonial::repository::TestimonialRepository;
use crate::domain::testimonial::use_cases::get_approved::GetApprovedTestimonialsUseCase;

pub struct GetApprovedTestimonialsUseCaseImpl {
    pub repository: Arc<dyn TestimonialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetApprovedTestimonialsUseCase for GetApprovedTestimonialsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Testimonial>, TestimonialError> {
        self.logger.debug("Fetching approved testimonials");

        let testimonials = self.repository.get_approved().await?;

        Ok(testimonials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::testimonial::model::NewTestimonialProps;
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
    async fn should_return_approved_testimonials() {
        let mut mock_repo = MockTestimonialRepo::new();
        mock_repo.expect_get_approved().returning(|| {
            let mut testimonial = Testimonial::new(NewTestimonialProps {
                name: "Aminata K.".to_string(),
                email: None,
                phone: None,
                message: "Excellents produits !".to_string(),
                image_url: None,
                video_url: None,
            })
            .unwrap();
            testimonial.is_approved = true;
            Ok(vec![testimonial])
        });

        let use_case = GetApprovedTestimonialsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let testimonials = result.unwrap();
        assert_eq!(testimonials.len(), 1);
        assert!(testimonials[0].is_approved);
    }
}
