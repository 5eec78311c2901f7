//! Trait store gateway: two read-only queries against the MySQL store.
//!
//! Every call opens its own connection and closes it before returning, on
//! the success and failure paths alike. There is no pool; the store sees one
//! short-lived connection per query.

use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};
use thiserror::Error;

use crate::models::mbti::TraitRow;

#[derive(Debug, Error)]
#[error("trait store query failed: {0}")]
pub struct StoreError(#[from] sqlx::Error);

/// Read-only access to the trait rows and the tag vocabulary.
///
/// Carried in `AppState` as `Arc<dyn TraitStore>`; tests swap in an
/// in-memory implementation.
#[async_trait]
pub trait TraitStore: Send + Sync {
    /// Exact-match lookup by MBTI code. `None` means the store has no row
    /// for that code, which is a normal outcome.
    async fn fetch_trait(&self, code: &str) -> Result<Option<TraitRow>, StoreError>;

    /// The full tag vocabulary, in stored order.
    async fn fetch_all_tags(&self) -> Result<Vec<String>, StoreError>;
}

/// The production gateway. Holds only the connection URL; connections are
/// per-call.
pub struct MySqlTraitStore {
    database_url: String,
}

impl MySqlTraitStore {
    pub fn new(database_url: String) -> Self {
        Self { database_url }
    }

    async fn connect(&self) -> Result<MySqlConnection, StoreError> {
        Ok(MySqlConnection::connect(&self.database_url).await?)
    }
}

#[async_trait]
impl TraitStore for MySqlTraitStore {
    async fn fetch_trait(&self, code: &str) -> Result<Option<TraitRow>, StoreError> {
        let mut conn = self.connect().await?;
        let row = sqlx::query_as::<_, TraitRow>("SELECT * FROM mbti_traits WHERE type = ?")
            .bind(code)
            .fetch_optional(&mut conn)
            .await;
        // Close before propagating so the query outcome never leaks a connection.
        let _ = conn.close().await;
        Ok(row?)
    }

    async fn fetch_all_tags(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connect().await?;
        let tags = sqlx::query_scalar::<_, String>("SELECT tag FROM travel_tags")
            .fetch_all(&mut conn)
            .await;
        let _ = conn.close().await;
        Ok(tags?)
    }
}
