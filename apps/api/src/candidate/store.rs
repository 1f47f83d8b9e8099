//! Candidate persistence — the document store behind a trait so another backend
//! can be swapped in without touching validation or prompt rendering.
//!
//! Insert-only: there is no update or delete, and no uniqueness constraint on
//! email or phone. Duplicate submissions become independent records.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::candidate::models::{CandidateRecord, StoredCandidate};

/// Name of the table holding candidate documents.
pub const COLLECTION: &str = "candidate_info";

static CREATE_COLLECTION_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {COLLECTION} (
            id                  UUID PRIMARY KEY,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL,
            phone_number        TEXT NOT NULL,
            years_of_experience INTEGER NOT NULL,
            desired_position    TEXT NOT NULL,
            current_location    TEXT NOT NULL,
            tech_stack          TEXT[] NOT NULL,
            created_at          TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
    )
});

static INSERT_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        INSERT INTO {COLLECTION}
            (id, name, email, phone_number, years_of_experience,
             desired_position, current_location, tech_stack)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#
    )
});

static SELECT_ALL_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        SELECT id, name, email, phone_number, years_of_experience,
               desired_position, current_location, tech_stack
        FROM {COLLECTION}
        ORDER BY created_at ASC, id ASC
        "#
    )
});

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Writes a new document and returns its store-assigned id.
    async fn save(&self, record: &CandidateRecord) -> Result<Uuid, StoreError>;

    /// Every document in the collection, oldest first.
    async fn list(&self) -> Result<Vec<StoredCandidate>, StoreError>;
}

/// Postgres-backed store. One row per document; `tech_stack` is a `TEXT[]`.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }

    /// Creates the collection if it does not exist yet. Safe to run on every startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_COLLECTION_SQL.as_str())
            .execute(&self.pool)
            .await?;

        info!("Collection '{COLLECTION}' ready");
        Ok(())
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn save(&self, record: &CandidateRecord) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(INSERT_SQL.as_str())
            .bind(id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.phone_number)
            .bind(record.years_of_experience)
            .bind(&record.desired_position)
            .bind(&record.current_location)
            .bind(&record.tech_stack)
            .execute(&self.pool)
            .await?;

        info!("Candidate inserted successfully: {id}");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredCandidate>, StoreError> {
        Ok(sqlx::query_as::<_, StoredCandidate>(SELECT_ALL_SQL.as_str())
            .fetch_all(&self.pool)
            .await?)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// In-memory store used by pipeline and router tests.
    #[derive(Default)]
    pub struct MemoryCandidateStore {
        docs: Mutex<Vec<StoredCandidate>>,
        pub fail_writes: bool,
    }

    impl MemoryCandidateStore {
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        pub fn len(&self) -> usize {
            self.docs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CandidateStore for MemoryCandidateStore {
        async fn save(&self, record: &CandidateRecord) -> Result<Uuid, StoreError> {
            if self.fail_writes {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            let id = Uuid::new_v4();
            self.docs.lock().unwrap().push(StoredCandidate {
                id,
                record: record.clone(),
            });
            Ok(id)
        }

        async fn list(&self) -> Result<Vec<StoredCandidate>, StoreError> {
            Ok(self.docs.lock().unwrap().clone())
        }
    }
}
