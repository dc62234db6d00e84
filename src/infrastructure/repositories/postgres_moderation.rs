// src/infrastructure/repositories/postgres_moderation.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::moderation::{
    ModerationMessage, ModerationMessageId, ModerationMessageRepository, NewModerationMessage,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresModerationMessageRepository {
    pool: PgPool,
}

impl PostgresModerationMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ModerationMessageRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    text: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ModerationMessageRow> for ModerationMessage {
    type Error = DomainError;

    fn try_from(row: ModerationMessageRow) -> Result<Self, Self::Error> {
        Ok(ModerationMessage {
            id: ModerationMessageId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            text: row.text,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ModerationMessageRepository for PostgresModerationMessageRepository {
    async fn insert(&self, message: NewModerationMessage) -> DomainResult<ModerationMessage> {
        let row = sqlx::query_as::<_, ModerationMessageRow>(
            "INSERT INTO moderation_messages (article_id, author_id, text, is_active, created_at)
             VALUES ($1, $2, $3, TRUE, $4)
             RETURNING id, article_id, author_id, text, is_active, created_at",
        )
        .bind(i64::from(message.article_id))
        .bind(i64::from(message.author_id))
        .bind(&message.text)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ModerationMessage::try_from(row)
    }

    async fn list_active_for_author(
        &self,
        author_id: UserId,
    ) -> DomainResult<Vec<ModerationMessage>> {
        let rows = sqlx::query_as::<_, ModerationMessageRow>(
            "SELECT id, article_id, author_id, text, is_active, created_at
             FROM moderation_messages
             WHERE author_id = $1 AND is_active = TRUE
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ModerationMessage::try_from).collect()
    }

    async fn deactivate(&self, id: ModerationMessageId, author_id: UserId) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE moderation_messages SET is_active = FALSE WHERE id = $1 AND author_id = $2",
        )
        .bind(i64::from(id))
        .bind(i64::from(author_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("moderation message not found".into()));
        }
        Ok(())
    }
}
