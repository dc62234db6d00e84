use crate::domain::article::{Article, ModerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub image: String,
    pub published: bool,
    pub moderation_status: ModerationStatus,
    pub category_id: i64,
    pub author_id: i64,
    pub views: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            summary: article.summary.into(),
            content: article.content.into(),
            image: article.image,
            published: article.published,
            moderation_status: article.moderation_status,
            category_id: article.category_id.into(),
            author_id: article.author_id.into(),
            views: article.views,
            comment_count: article.comment_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
