use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::warn;

use business::domain::errors::RepositoryError;
use business::domain::settings::model::{SETTINGS_SCHEMA_VERSION, SiteSettings};
use business::domain::settings::repository::SettingsRepository;

/// Fixed key of the singleton settings row.
const SETTINGS_KEY: &str = "site";

#[derive(Debug, FromRow)]
struct SettingsRow {
    pub version: i32,
    pub data: serde_json::Value,
}

/// Decides whether a stored blob is usable. A version mismatch or an
/// unreadable blob yields `None`, which callers treat as "no stored
/// settings" and fall back to defaults.
fn decode_settings(version: i32, data: serde_json::Value) -> Option<SiteSettings> {
    if version != SETTINGS_SCHEMA_VERSION as i32 {
        warn!(
            "Stored settings version {} does not match {}, using defaults",
            version, SETTINGS_SCHEMA_VERSION
        );
        return None;
    }

    match serde_json::from_value(data) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Stored settings blob is unreadable ({}), using defaults", e);
            None
        }
    }
}

/// Stores the whole settings aggregate as one versioned JSONB blob. A row
/// whose version does not match the current schema version is treated as
/// absent, so the site falls back to defaults instead of loading an
/// incompatible shape.
pub struct SettingsRepositoryPostgres {
    pool: PgPool,
}

impl SettingsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn load(&self) -> Result<Option<SiteSettings>, RepositoryError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT version, data FROM site_settings WHERE key = $1",
        )
        .bind(SETTINGS_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(row.and_then(|row| decode_settings(row.version, row.data)))
    }

    async fn save(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        let data = serde_json::to_value(settings).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO site_settings (key, version, data, updated_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (key) DO UPDATE SET
                version = EXCLUDED.version,
                data = EXCLUDED.data,
                updated_at = now()"#,
        )
        .bind(SETTINGS_KEY)
        .bind(SETTINGS_SCHEMA_VERSION as i32)
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
