use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleBody, ArticleId, ArticleSummary, ArticleTitle, ArticleUpdate,
            ModerationStatus, specifications::CanUpdateArticleSpec,
        },
        category::CategoryId,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub publish: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        // A foreign article is indistinguishable from a missing one.
        let update_spec = CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id);
        if !update_spec.is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let UpdateArticleCommand {
            id: _,
            title,
            summary,
            content,
            image,
            category_id,
            publish,
        } = command;

        let mut update = ArticleUpdate::new(id, article.updated_at);

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let summary_opt = summary.map(ArticleSummary::new).transpose()?;
        let content_opt = content.map(ArticleBody::new).transpose()?;

        update = self
            .apply_content_updates(&mut article, title_opt, summary_opt, content_opt, update)
            .await?;

        if let Some(image) = image {
            update = update.with_image(image);
        }

        if let Some(raw_category) = category_id {
            let category_id = CategoryId::new(raw_category)?;
            self.category_repo
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("category not found"))?;
            update = update.with_category(category_id);
        }

        if let Some(publish_flag) = publish {
            update = self.apply_publish_update(&mut article, publish_flag, update)?;
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    async fn apply_content_updates(
        &self,
        article: &mut Article,
        title_opt: Option<ArticleTitle>,
        summary_opt: Option<ArticleSummary>,
        content_opt: Option<ArticleBody>,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        if title_opt.is_none() && summary_opt.is_none() && content_opt.is_none() {
            return Ok(update);
        }

        let now = self.clock.now();
        let new_title = title_opt.clone().unwrap_or_else(|| article.title.clone());
        let new_summary = summary_opt.unwrap_or_else(|| article.summary.clone());
        let new_content = content_opt.unwrap_or_else(|| article.content.clone());
        article.set_content(new_title.clone(), new_summary.clone(), new_content.clone(), now);
        update = update
            .with_title(new_title)
            .with_summary(new_summary)
            .with_content(new_content);
        update.set_updated_at(article.updated_at);

        if let Some(title) = &title_opt {
            let slug = self
                .slug_service
                .generate_unique_slug(title, Some(article.id))
                .await?;
            article.set_slug(slug.clone(), now);
            update = update.with_slug(slug);
            update.set_updated_at(article.updated_at);
        }

        Ok(update)
    }

    fn apply_publish_update(
        &self,
        article: &mut Article,
        publish_flag: bool,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        if publish_flag == article.published {
            return Ok(update);
        }

        if publish_flag && article.moderation_status != ModerationStatus::NotModeration {
            return Err(ApplicationError::conflict(
                "article cannot be published while in the moderation workflow",
            ));
        }

        let now = self.clock.now();
        article.set_published(publish_flag, now);
        update = update.with_published(publish_flag);
        update.set_updated_at(article.updated_at);
        Ok(update)
    }
}
