// src/application/queries/moderation.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ModerationMessageDto},
        error::ApplicationResult,
    },
    domain::moderation::ModerationMessageRepository,
};

pub struct ModerationQueryService {
    message_repo: Arc<dyn ModerationMessageRepository>,
}

impl ModerationQueryService {
    pub fn new(message_repo: Arc<dyn ModerationMessageRepository>) -> Self {
        Self { message_repo }
    }

    /// Active rejection notes addressed to the calling author.
    pub async fn my_messages(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ModerationMessageDto>> {
        let messages = self.message_repo.list_active_for_author(actor.id).await?;
        Ok(messages.into_iter().map(ModerationMessageDto::from).collect())
    }
}
