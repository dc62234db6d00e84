// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleSummary, ArticleTitle, ModerationStatus, NewArticle},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: Option<String>,
    pub category_id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let summary = ArticleSummary::new(command.summary)?;
        let content = ArticleBody::new(command.content)?;
        let category_id = CategoryId::new(command.category_id)?;

        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let now = self.clock.now();
        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_article = NewArticle {
            title,
            slug,
            summary,
            content,
            image: command.image,
            published: command.publish,
            moderation_status: ModerationStatus::NotModeration,
            category_id,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), author = %actor.username, "article created");
        Ok(created.into())
    }
}
