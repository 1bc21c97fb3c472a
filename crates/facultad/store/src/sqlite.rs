//! SQLite adapter: pool construction and schema bootstrap.

use crate::{StoreConfig, StoreError, StoreResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Fixed schema of the electoral model.
pub const SCHEMA: &str = include_str!("../schema/facultad.sql");

/// Connected, schema-initialized electoral database.
#[derive(Debug, Clone)]
pub struct FacultadStore {
    pool: SqlitePool,
}

impl FacultadStore {
    /// Open (creating if missing) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        Self::connect_with_options(database_url, 4, 5).await
    }

    /// Connect with explicit pool parameters.
    pub async fn connect_with_options(
        database_url: &str,
        max_connections: u32,
        connect_timeout_secs: u64,
    ) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Connection(format!("invalid sqlite url {database_url}: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(connect_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to open sqlite: {e}")))?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StoreError::Connection(e.to_string()))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to open in-memory sqlite: {e}")))?;

        Self::from_pool(pool).await
    }

    /// Open the store described by `config`.
    pub async fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        match config {
            StoreConfig::Memory => Self::in_memory().await,
            StoreConfig::Sqlite {
                url,
                max_connections,
                connect_timeout_secs,
            } => Self::connect_with_options(url, *max_connections, *connect_timeout_secs).await,
        }
    }

    /// Wrap an existing pool. Foreign keys must already be enabled on its
    /// connections; the schema is applied here.
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction. Dropping it without commit rolls back.
    pub async fn begin(&self) -> StoreResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|e| StoreError::Connection(format!("failed to begin transaction: {e}")))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn init_schema(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Schema(e.to_string()))?;
        debug!("electoral schema applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, Constraint};
    use sqlx::Row;

    const TABLES: [&str; 17] = [
        "facultad",
        "empadronado",
        "estudiante",
        "graduado",
        "profesor",
        "agrupacion_politica",
        "calendario_electoral",
        "agrupacion_politica_se_presenta_durante_calendario_electoral",
        "consejero_directivo",
        "consejero_superior",
        "decano",
        "rector",
        "voto_a_decano",
        "voto_a_consejero_superior",
        "rector_fue_votado_por_consejero_directivo",
        "rector_fue_votado_por_consejero_superior",
        "rector_fue_votado_por_decano",
    ];

    #[tokio::test]
    async fn in_memory_store_has_every_table() {
        let store = FacultadStore::in_memory().await.unwrap();
        for table in TABLES {
            let row = sqlx::query("SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table)
                .fetch_one(store.pool())
                .await
                .unwrap();
            let n: i64 = row.get("n");
            assert_eq!(n, 1, "missing table {table}");
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let store = FacultadStore::in_memory().await.unwrap();
        let err = sqlx::query("INSERT INTO estudiante (dni) VALUES (123)")
            .execute(store.pool())
            .await
            .unwrap_err();
        assert_eq!(classify(&err), Some(Constraint::ForeignKey));
    }

    #[tokio::test]
    async fn primary_keys_report_unique_violations() {
        let store = FacultadStore::in_memory().await.unwrap();
        sqlx::query("INSERT INTO calendario_electoral (periodo) VALUES (2014)")
            .execute(store.pool())
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO calendario_electoral (periodo) VALUES (2014)")
            .execute(store.pool())
            .await
            .unwrap_err();
        assert_eq!(classify(&err), Some(Constraint::Unique));
        assert!(matches!(
            StoreError::from(err),
            StoreError::Constraint {
                constraint: Constraint::Unique,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn rolled_back_transaction_leaves_nothing() {
        let store = FacultadStore::in_memory().await.unwrap();
        {
            let mut tx = store.begin().await.unwrap();
            sqlx::query("INSERT INTO calendario_electoral (periodo) VALUES (2014)")
                .execute(&mut *tx)
                .await
                .unwrap();
        }
        let row = sqlx::query("SELECT count(*) AS n FROM calendario_electoral")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("n"), 0);
    }

    #[tokio::test]
    async fn schema_can_be_reapplied_over_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("facultad.db").display());

        let store = FacultadStore::connect(&url).await.unwrap();
        sqlx::query("INSERT INTO calendario_electoral (periodo) VALUES (2014)")
            .execute(store.pool())
            .await
            .unwrap();
        store.close().await;

        let reopened = FacultadStore::connect(&url).await.unwrap();
        let row = sqlx::query("SELECT periodo FROM calendario_electoral")
            .fetch_one(reopened.pool())
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("periodo"), 2014);
    }
}
