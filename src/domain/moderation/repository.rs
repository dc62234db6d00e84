use crate::domain::errors::DomainResult;
use crate::domain::moderation::entity::{
    ModerationMessage, ModerationMessageId, NewModerationMessage,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ModerationMessageRepository: Send + Sync {
    async fn insert(&self, message: NewModerationMessage) -> DomainResult<ModerationMessage>;
    /// Active messages addressed to an author, newest first.
    async fn list_active_for_author(
        &self,
        author_id: UserId,
    ) -> DomainResult<Vec<ModerationMessage>>;
    /// Mark a message as handled by its recipient.
    async fn deactivate(&self, id: ModerationMessageId, author_id: UserId) -> DomainResult<()>;
}
