//! User document storage
//!
//! Each user owns exactly one JSON document. Stores read and write the whole
//! document; there is no versioning, so concurrent writers race and the
//! last write wins.

use anyhow::Result;
use async_trait::async_trait;
use fitflow_shared::UserDocument;
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db;

/// Whole-document storage keyed by user id
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load a user's document, `None` before onboarding
    async fn get(&self, user_id: &str) -> Result<Option<UserDocument>>;

    /// Overwrite a user's document
    async fn put(&self, user_id: &str, document: &UserDocument) -> Result<()>;

    /// Check the backing store is reachable
    async fn health_check(&self) -> Result<()>;
}

// ============================================================================
// PostgreSQL
// ============================================================================

/// Documents stored as JSONB rows in `user_documents`
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserDocument>> {
        let row: Option<(Json<UserDocument>,)> =
            sqlx::query_as("SELECT document FROM user_documents WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(Json(document),)| document))
    }

    async fn put(&self, user_id: &str, document: &UserDocument) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_documents (user_id, document, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET document = EXCLUDED.document, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(document))
        .execute(&self.pool)
        .await?;

        debug!(user_id, "Stored user document");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Process-local store for tests and single-node development
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, UserDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserDocument>> {
        Ok(self.documents.read().await.get(user_id).cloned())
    }

    async fn put(&self, user_id: &str, document: &UserDocument) -> Result<()> {
        self.documents
            .write()
            .await
            .insert(user_id.to_string(), document.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
