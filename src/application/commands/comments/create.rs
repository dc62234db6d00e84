// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, specifications::CanViewUnpublishedArticleSpec},
        comment::{CommentId, CommentText, NewComment},
    },
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub text: String,
    pub parent_id: Option<i64>,
}

impl CommentCommandService {
    /// Create a comment, optionally threaded under a parent comment of
    /// the same article. The repository bumps the article's comment
    /// counter in the same transaction.
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_capability(actor, "comments", "create")?;

        let article_id = ArticleId::new(command.article_id)?;
        let text = CommentText::new(command.text)?;

        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_publicly_visible() {
            let spec =
                CanViewUnpublishedArticleSpec::new(&actor.capabilities, &article, actor.id);
            if !spec.is_satisfied() {
                return Err(ApplicationError::not_found("article not found"));
            }
        }

        let parent_id = match command.parent_id {
            Some(raw) => Some(self.resolve_parent(article_id, raw).await?),
            None => None,
        };

        let new_comment = NewComment {
            article_id,
            author_id: actor.id,
            text,
            parent_id,
            created_at: self.clock.now(),
        };

        let created = self.comment_repo.insert(new_comment).await?;
        Ok(created.into())
    }

    async fn resolve_parent(
        &self,
        article_id: ArticleId,
        raw_parent: i64,
    ) -> ApplicationResult<CommentId> {
        let parent_id = CommentId::new(raw_parent)?;
        let parent = self
            .comment_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;

        if parent.article_id != article_id {
            return Err(ApplicationError::validation(
                "parent comment belongs to a different article",
            ));
        }

        Ok(parent_id)
    }
}
