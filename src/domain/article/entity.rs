// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleSummary, ArticleTitle, ModerationStatus,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: ArticleSummary,
    pub content: ArticleBody,
    pub image: String,
    pub published: bool,
    pub moderation_status: ModerationStatus,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub views: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Public visibility: listed and readable by anyone.
    pub fn is_publicly_visible(&self) -> bool {
        self.published && self.moderation_status == ModerationStatus::NotModeration
    }

    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        summary: ArticleSummary,
        content: ArticleBody,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.summary = summary;
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: ArticleSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.published = published;
        self.updated_at = now;
    }

    /// Author hands the article to the review queue. The article is taken
    /// off the public site until a moderator decides.
    pub fn submit_for_moderation(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.moderation_status == ModerationStatus::Moderation {
            return Err(DomainError::Conflict(
                "article is already awaiting moderation".into(),
            ));
        }
        self.moderation_status = ModerationStatus::Moderation;
        self.published = false;
        self.updated_at = now;
        Ok(())
    }

    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_awaiting_moderation()?;
        self.moderation_status = ModerationStatus::NotModeration;
        self.published = true;
        self.updated_at = now;
        Ok(())
    }

    pub fn reject(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_awaiting_moderation()?;
        self.moderation_status = ModerationStatus::ErrorModeration;
        self.published = false;
        self.updated_at = now;
        Ok(())
    }

    fn ensure_awaiting_moderation(&self) -> DomainResult<()> {
        if self.moderation_status != ModerationStatus::Moderation {
            return Err(DomainError::Conflict(
                "article is not awaiting moderation".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: ArticleSummary,
    pub content: ArticleBody,
    pub image: Option<String>,
    pub published: bool,
    pub moderation_status: ModerationStatus,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub summary: Option<ArticleSummary>,
    pub content: Option<ArticleBody>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published: Option<bool>,
    pub moderation_status: Option<ModerationStatus>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            summary: None,
            content: None,
            image: None,
            category_id: None,
            published: None,
            moderation_status: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_summary(mut self, summary: ArticleSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_content(mut self, content: ArticleBody) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_moderation_status(mut self, status: ModerationStatus) -> Self {
        self.moderation_status = Some(status);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title-00001").unwrap(),
            summary: ArticleSummary::new("summary").unwrap(),
            content: ArticleBody::new("content").unwrap(),
            image: "default_images/it_news_default.webp".into(),
            published: true,
            moderation_status: ModerationStatus::NotModeration,
            category_id: CategoryId::new(1).unwrap(),
            author_id: UserId::new(1).unwrap(),
            views: 0,
            comment_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn submitting_unpublishes_and_queues() {
        let mut article = sample_article();
        let now = Utc::now();
        article.submit_for_moderation(now).unwrap();
        assert!(!article.published);
        assert_eq!(article.moderation_status, ModerationStatus::Moderation);
        assert_eq!(article.updated_at, now);
        assert!(!article.is_publicly_visible());
    }

    #[test]
    fn double_submission_conflicts() {
        let mut article = sample_article();
        article.submit_for_moderation(Utc::now()).unwrap();
        assert!(article.submit_for_moderation(Utc::now()).is_err());
    }

    #[test]
    fn approve_publishes_and_clears_status() {
        let mut article = sample_article();
        article.submit_for_moderation(Utc::now()).unwrap();
        let later = Utc::now();
        article.approve(later).unwrap();
        assert!(article.published);
        assert_eq!(article.moderation_status, ModerationStatus::NotModeration);
        assert!(article.is_publicly_visible());
    }

    #[test]
    fn reject_marks_error_state() {
        let mut article = sample_article();
        article.submit_for_moderation(Utc::now()).unwrap();
        article.reject(Utc::now()).unwrap();
        assert!(!article.published);
        assert_eq!(
            article.moderation_status,
            ModerationStatus::ErrorModeration
        );
    }

    #[test]
    fn approve_requires_queue_membership() {
        let mut article = sample_article();
        assert!(article.approve(Utc::now()).is_err());
        assert!(article.reject(Utc::now()).is_err());
    }

    #[test]
    fn resubmission_after_rejection_is_allowed() {
        let mut article = sample_article();
        article.submit_for_moderation(Utc::now()).unwrap();
        article.reject(Utc::now()).unwrap();
        assert!(article.submit_for_moderation(Utc::now()).is_ok());
    }
}
