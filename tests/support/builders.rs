// tests/support/builders.rs
use chrono::{Duration, Utc};

use pandora_core::application::dto::AuthenticatedUser;
use pandora_core::domain::article::{
    Article, ArticleBody, ArticleId, ArticleSlug, ArticleSummary, ArticleTitle, ModerationStatus,
};
use pandora_core::domain::category::CategoryId;
use pandora_core::domain::user::{Role, UserId};

use super::mocks::test_username;

pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    let now = Utc::now();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: test_username(id),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    category_id: i64,
    published: bool,
    moderation_status: ModerationStatus,
    age_minutes: i64,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: "Test Article".into(),
            slug: format!("test-article-{id:05}"),
            author_id: 1,
            category_id: 1,
            published: false,
            moderation_status: ModerationStatus::NotModeration,
            age_minutes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn in_moderation(mut self) -> Self {
        self.published = false;
        self.moderation_status = ModerationStatus::Moderation;
        self
    }

    pub fn rejected(mut self) -> Self {
        self.published = false;
        self.moderation_status = ModerationStatus::ErrorModeration;
        self
    }

    /// Push the article back in time so listings have a stable order.
    pub fn age_minutes(mut self, minutes: i64) -> Self {
        self.age_minutes = minutes;
        self
    }

    pub fn build(self) -> Article {
        let created = Utc::now() - Duration::minutes(self.age_minutes);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            summary: ArticleSummary::new("summary").unwrap(),
            content: ArticleBody::new("content").unwrap(),
            image: "default_images/it_news_default.webp".into(),
            published: self.published,
            moderation_status: self.moderation_status,
            category_id: CategoryId::new(self.category_id).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            views: 0,
            comment_count: 0,
            created_at: created,
            updated_at: created,
        }
    }
}
