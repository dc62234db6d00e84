// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, ReactionTallyDto, build_comment_tree},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, specifications::CanViewUnpublishedArticleSpec},
        comment::{CommentId, CommentRepository},
        reaction::CommentReactionRepository,
    },
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    reaction_repo: Arc<dyn CommentReactionRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        reaction_repo: Arc<dyn CommentReactionRepository>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            reaction_repo,
        }
    }

    /// Threaded comments of an article. Top-level comments come newest
    /// first with replies nested under them.
    pub async fn list_for_article(
        &self,
        viewer: Option<&AuthenticatedUser>,
        article_id: i64,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(article_id)?;
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_publicly_visible() {
            let allowed = viewer.is_some_and(|viewer| {
                CanViewUnpublishedArticleSpec::new(&viewer.capabilities, &article, viewer.id)
                    .is_satisfied()
            });
            if !allowed {
                return Err(ApplicationError::not_found("article not found"));
            }
        }

        let comments = self.comment_repo.list_by_article(article_id).await?;
        Ok(build_comment_tree(comments))
    }

    pub async fn reaction_tally(&self, comment_id: i64) -> ApplicationResult<ReactionTallyDto> {
        let id = CommentId::new(comment_id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let tally = self.reaction_repo.tally(id).await?;
        Ok(tally.into())
    }
}
