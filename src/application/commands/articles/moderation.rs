// src/application/commands/articles/moderation.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleUpdate, specifications::CanUpdateArticleSpec},
        moderation::{ModerationMessageId, NewModerationMessage},
    },
};

pub struct SubmitForModerationCommand {
    pub id: i64,
}

pub struct ApproveArticleCommand {
    pub id: i64,
}

pub struct RejectArticleCommand {
    pub id: i64,
    pub message: String,
}

pub struct DismissModerationMessageCommand {
    pub message_id: i64,
}

impl ArticleCommandService {
    /// Author hands their article over to the review queue.
    pub async fn submit_for_moderation(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitForModerationCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let original_updated_at = article.updated_at;
        article.submit_for_moderation(self.clock.now())?;
        let updated = self
            .persist_workflow_state(&article, original_updated_at)
            .await?;
        tracing::info!(article_id = i64::from(id), "article submitted for moderation");
        Ok(updated.into())
    }

    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "moderate")?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let original_updated_at = article.updated_at;
        article.approve(self.clock.now())?;
        let updated = self
            .persist_workflow_state(&article, original_updated_at)
            .await?;
        tracing::info!(article_id = i64::from(id), moderator = %actor.username, "article approved");
        Ok(updated.into())
    }

    pub async fn reject_article(
        &self,
        actor: &AuthenticatedUser,
        command: RejectArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "moderate")?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        let original_updated_at = article.updated_at;
        article.reject(now)?;

        let message =
            NewModerationMessage::new(article.id, article.author_id, command.message, now)?;

        let updated = self
            .persist_workflow_state(&article, original_updated_at)
            .await?;
        self.moderation_repo.insert(message).await?;
        tracing::info!(article_id = i64::from(id), moderator = %actor.username, "article rejected");
        Ok(updated.into())
    }

    /// Recipient acknowledges a rejection message.
    pub async fn dismiss_moderation_message(
        &self,
        actor: &AuthenticatedUser,
        command: DismissModerationMessageCommand,
    ) -> ApplicationResult<()> {
        let id = ModerationMessageId::new(command.message_id)?;
        self.moderation_repo.deactivate(id, actor.id).await?;
        Ok(())
    }

    async fn persist_workflow_state(
        &self,
        article: &Article,
        original_updated_at: chrono::DateTime<chrono::Utc>,
    ) -> ApplicationResult<Article> {
        let mut update = ArticleUpdate::new(article.id, original_updated_at)
            .with_published(article.published)
            .with_moderation_status(article.moderation_status);
        update.set_updated_at(article.updated_at);
        Ok(self.write_repo.update(update).await?)
    }
}
