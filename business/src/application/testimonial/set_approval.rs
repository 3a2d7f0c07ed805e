use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::testimonial::errors::TestimonialError;
use crate::domain::testimonial::model::Testimonial;
use crate::domain::testimonial::repository::TestimonialRepository;
use crate::domain::testimonial::use_cases::set_approval::{
    SetTestimonialApprovalParams, SetTestimonialApprovalUseCase,
};

pub struct SetTestimonialApprovalUseCaseImpl {
    pub repository: Arc<dyn TestimonialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetTestimonialApprovalUseCase for SetTestimonialApprovalUseCaseImpl {
    async fn execute(
        &self,
        params: SetTestimonialApprovalParams,
    ) -> Result<Testimonial, TestimonialError> {
        self.logger.info(&format!(
            "Setting approval of testimonial {} to {}",
            params.id, params.is_approved
        ));

        let mut testimonial = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => TestimonialError::NotFound,
                other => TestimonialError::Repository(other),
            })?;

        testimonial.is_approved = params.is_approved;
        self.repository.save(&testimonial).await?;

        Ok(testimonial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn stored_testimonial() -> Testimonial {
        Testimonial::new(NewTestimonialProps {
            name: "Aminata K.".to_string(),
            email: None,
            phone: None,
            message: "Excellents produits !".to_string(),
            image_url: None,
            video_url: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_approve_testimonial() {
        let mut mock_repo = MockTestimonialRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(stored_testimonial()));
        mock_repo
            .expect_save()
            .withf(|t| t.is_approved)
            .returning(|_| Ok(()));

        let use_case = SetTestimonialApprovalUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetTestimonialApprovalParams {
                id: Uuid::new_v4(),
                is_approved: true,
            })
            .await;

        assert!(result.unwrap().is_approved);
    }

    #[tokio::test]
    async fn should_return_error_when_testimonial_not_found() {
        let mut mock_repo = MockTestimonialRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SetTestimonialApprovalUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetTestimonialApprovalParams {
                id: Uuid::new_v4(),
                is_approved: true,
            })
            .await;

        assert!(matches!(result.unwrap_err(), TestimonialError::NotFound));
    }
}
