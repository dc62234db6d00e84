// src/domain/moderation/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModerationMessageId(pub i64);

impl ModerationMessageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "moderation message id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ModerationMessageId> for i64 {
    fn from(value: ModerationMessageId) -> Self {
        value.0
    }
}

/// Feedback a moderator leaves when rejecting an article. Addressed to
/// the article's author; `is_active` lets the author dismiss it.
#[derive(Debug, Clone)]
pub struct ModerationMessage {
    pub id: ModerationMessageId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewModerationMessage {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewModerationMessage {
    pub fn new(
        article_id: ArticleId,
        author_id: UserId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "moderation message cannot be empty".into(),
            ));
        }
        Ok(Self {
            article_id,
            author_id,
            text,
            created_at,
        })
    }
}
