use crate::domain::moderation::ModerationMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModerationMessageDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ModerationMessage> for ModerationMessageDto {
    fn from(message: ModerationMessage) -> Self {
        Self {
            id: message.id.into(),
            article_id: message.article_id.into(),
            author_id: message.author_id.into(),
            text: message.text,
            is_active: message.is_active,
            created_at: message.created_at,
        }
    }
}
