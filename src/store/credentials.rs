use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::ZopError;
use crate::models::StoredCredential;

/// Read-only view of the gcloud `credentials.db` SQLite database
pub struct CredentialStore {
    pool: SqlitePool,
}

impl CredentialStore {
    pub async fn open(path: &Path) -> Result<Self, ZopError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every logged-in account with its raw credential JSON
    pub async fn accounts(&self) -> Result<Vec<StoredCredential>, ZopError> {
        let rows = sqlx::query_as::<_, StoredCredential>("SELECT account_id, value FROM credentials")
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!("Found {} local credentials", rows.len());
        Ok(rows)
    }
}
