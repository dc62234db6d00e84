use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::str::FromStr;

/// Author-dashboard buckets, mirroring the classic
/// published/draft/in-review/rejected split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorArticleState {
    Published,
    Draft,
    InModeration,
    Rejected,
}

impl AuthorArticleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorArticleState::Published => "published",
            AuthorArticleState::Draft => "draft",
            AuthorArticleState::InModeration => "moderation",
            AuthorArticleState::Rejected => "rejected",
        }
    }
}

impl FromStr for AuthorArticleState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(AuthorArticleState::Published),
            "draft" => Ok(AuthorArticleState::Draft),
            "moderation" => Ok(AuthorArticleState::InModeration),
            "rejected" => Ok(AuthorArticleState::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown article state '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ArticleListFilter {
    /// Published articles that are not caught up in moderation.
    Public,
    /// Public articles within the category identified by its slug.
    Category(String),
    /// One author's articles in a given workflow bucket.
    Author {
        author_id: UserId,
        state: AuthorArticleState,
    },
    /// Articles awaiting a moderator's decision.
    ModerationQueue,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Atomically bump the view counter, returning the new value.
    async fn record_view(&self, id: ArticleId) -> DomainResult<i64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;
}
