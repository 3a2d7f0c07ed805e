use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.description, p.price, p.category_id, \
     c.name AS category_name, p.image_url, p.video_url, p.created_at, p.updated_at \
     FROM products p LEFT JOIN categories c ON c.id = p.category_id";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_PRODUCT} ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCT} WHERE p.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        // The denormalized category name is not stored; reads re-derive it
        // from the categories table.
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, category_id, image_url, video_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                category_id = EXCLUDED.category_id,
                image_url = EXCLUDED.image_url,
                video_url = EXCLUDED.video_url,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.category_id)
        .bind(&product.image_url)
        .bind(&product.video_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count_by_category(&self, category_id: Uuid) -> Result<i64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count)
    }
}
