use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::testimonial::model::Testimonial;
use business::domain::testimonial::repository::TestimonialRepository;

use super::entity::TestimonialEntity;

const SELECT_TESTIMONIAL: &str = "SELECT id, name, email, phone, message, image_url, video_url, \
     is_approved, created_at FROM testimonials";

pub struct TestimonialRepositoryPostgres {
    pool: PgPool,
}

impl TestimonialRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let entities = sqlx::query_as::<_, TestimonialEntity>(&format!(
            "{SELECT_TESTIMONIAL} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_approved(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let entities = sqlx::query_as::<_, TestimonialEntity>(&format!(
            "{SELECT_TESTIMONIAL} WHERE is_approved ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Testimonial, RepositoryError> {
        let entity =
            sqlx::query_as::<_, TestimonialEntity>(&format!("{SELECT_TESTIMONIAL} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, testimonial: &Testimonial) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO testimonials (id, name, email, phone, message, image_url, video_url, is_approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                message = EXCLUDED.message,
                image_url = EXCLUDED.image_url,
                video_url = EXCLUDED.video_url,
                is_approved = EXCLUDED.is_approved"#,
        )
        .bind(testimonial.id)
        .bind(&testimonial.name)
        .bind(&testimonial.email)
        .bind(&testimonial.phone)
        .bind(&testimonial.message)
        .bind(&testimonial.image_url)
        .bind(&testimonial.video_url)
        .bind(testimonial.is_approved)
        .bind(testimonial.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
