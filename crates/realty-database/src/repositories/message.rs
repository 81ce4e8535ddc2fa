//! Inquiry message repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;
use realty_core::types::HomeId;
use realty_entity::message::{CreateMessage, Message, MessageWithSender};

use crate::store::MessageStore;

/// Repository for inquiry messages.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn create(&self, data: &CreateMessage) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            r#"INSERT INTO messages (text, home_id, sender_id)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(&data.text)
        .bind(data.home_id)
        .bind(data.sender_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    async fn find_by_home(&self, id: HomeId) -> AppResult<Vec<MessageWithSender>> {
        sqlx::query_as::<_, MessageWithSender>(
            r#"SELECT m.*,
                      u.name  AS sender_name,
                      u.email AS sender_email,
                      u.phone AS sender_phone
               FROM messages m
               JOIN users u ON u.id = m.sender_id
               WHERE m.home_id = $1
               ORDER BY m.created_at ASC, m.id ASC"#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list messages for home", e)
        })
    }
}
