// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, ReactionTallyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleId, ArticleSlug, specifications::CanViewUnpublishedArticleSpec,
    },
};

impl ArticleQueryService {
    /// Look up an article by slug. Public reads count as a view;
    /// unpublished articles stay invisible unless the viewer is the
    /// author or may see drafts.
    pub async fn get_by_slug(
        &self,
        viewer: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let mut article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.is_publicly_visible() {
            article.views = self.write_repo.record_view(article.id).await?;
            return Ok(article.into());
        }

        let allowed = viewer.is_some_and(|viewer| {
            CanViewUnpublishedArticleSpec::new(&viewer.capabilities, &article, viewer.id)
                .is_satisfied()
        });
        if !allowed {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(article.into())
    }

    pub async fn reaction_tally(
        &self,
        viewer: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<ReactionTallyDto> {
        let article = self.visible_article(viewer, id).await?;
        let tally = self.reaction_repo.tally(article.id).await?;
        Ok(tally.into())
    }

    pub(super) async fn visible_article(
        &self,
        viewer: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.is_publicly_visible() {
            return Ok(article);
        }

        let allowed = viewer.is_some_and(|viewer| {
            CanViewUnpublishedArticleSpec::new(&viewer.capabilities, &article, viewer.id)
                .is_satisfied()
        });
        if allowed {
            Ok(article)
        } else {
            Err(ApplicationError::not_found("article not found"))
        }
    }
}
