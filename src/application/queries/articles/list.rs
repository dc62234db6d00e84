// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListCursor, ArticleListFilter, AuthorArticleState},
        category::CategorySlug,
        user::UserId,
    },
};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

pub struct ListAuthorArticlesQuery {
    pub author_id: i64,
    pub state: AuthorArticleState,
    pub page: PageRequest,
}

impl ArticleQueryService {
    pub async fn list_public(&self, page: PageRequest) -> ApplicationResult<CursorPage<ArticleDto>> {
        self.list_with_filter(ArticleListFilter::Public, page).await
    }

    pub async fn list_by_category(
        &self,
        category_slug: String,
        page: PageRequest,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let slug = CategorySlug::new(category_slug)?;
        self.category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.list_with_filter(ArticleListFilter::Category(slug.into()), page)
            .await
    }

    /// An author's own dashboard buckets. Anyone may browse the
    /// published bucket; the rest require being that author or holding
    /// draft-viewing rights.
    pub async fn list_by_author(
        &self,
        actor: &AuthenticatedUser,
        query: ListAuthorArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let author_id = UserId::new(query.author_id)?;

        if query.state != AuthorArticleState::Published
            && actor.id != author_id
            && !actor.has_capability("articles", "view:drafts")
        {
            return Err(ApplicationError::forbidden(
                "cannot browse another author's unpublished articles",
            ));
        }

        self.list_with_filter(
            ArticleListFilter::Author {
                author_id,
                state: query.state,
            },
            query.page,
        )
        .await
    }

    pub async fn moderation_queue(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        if !actor.has_capability("articles", "moderate") {
            return Err(ApplicationError::forbidden(
                "moderation queue requires moderation rights",
            ));
        }
        self.list_with_filter(ArticleListFilter::ModerationQueue, page)
            .await
    }

    async fn list_with_filter(
        &self,
        filter: ArticleListFilter,
        page: PageRequest,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let limit = normalize_limit(page.limit);
        let cursor = decode_cursor(page.cursor.as_deref())?;

        let (articles, next) = self.read_repo.list_page(filter, limit, cursor).await?;
        let items = articles.into_iter().map(ArticleDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(n) => n.min(MAX_PAGE_SIZE),
    }
}

fn decode_cursor(cursor: Option<&str>) -> ApplicationResult<Option<ArticleListCursor>> {
    match cursor {
        None => Ok(None),
        Some(token) => Ok(Some(ArticleListCursor::decode(token)?)),
    }
}
