use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

use super::entity::CartItemEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT session_id, product_id, name, unit_price, image_url, category_name, quantity, updated_at \
             FROM cart_items WHERE session_id = $1 ORDER BY line_no",
        )
        .bind(session_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if entities.is_empty() {
            return Ok(None);
        }

        let updated_at = entities
            .iter()
            .map(|e| e.updated_at)
            .max()
            .unwrap_or_else(chrono::Utc::now);
        let items = entities.into_iter().map(|e| e.into_domain()).collect();

        Ok(Some(Cart::from_repository(
            session_id.clone(),
            items,
            updated_at,
        )))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        // The stored line list is replaced wholesale inside one transaction.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
            .bind(cart.session_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (line_no, item) in cart.items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO cart_items (session_id, product_id, name, unit_price, image_url, category_name, quantity, line_no, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
            )
            .bind(cart.session_id.as_str())
            .bind(item.product_id)
            .bind(&item.name)
            .bind(&item.unit_price)
            .bind(&item.image_url)
            .bind(&item.category_name)
            .bind(item.quantity as i32)
            .bind(line_no as i32)
            .bind(cart.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
            .bind(session_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
