use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;

const SELECT_CATEGORY: &str = "SELECT c.id, c.name, c.description, c.image_url, \
     COUNT(p.id) AS product_count, c.created_at \
     FROM categories c LEFT JOIN products p ON p.category_id = c.id \
     GROUP BY c.id";

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, CategoryEntity>(&format!("{SELECT_CATEGORY} ORDER BY c.name"))
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        let entity =
            sqlx::query_as::<_, CategoryEntity>(&format!("{SELECT_CATEGORY} HAVING c.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO categories (id, name, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                image_url = EXCLUDED.image_url"#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.image_url)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
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
