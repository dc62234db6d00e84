// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleListCursor, ArticleListFilter, ArticleReadRepository,
    ArticleSlug, ArticleSummary, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    AuthorArticleState, ModerationStatus, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, slug, summary, content, image, published, \
     moderation_status, category_id, author_id, views, comment_count, created_at, updated_at";

const DEFAULT_IMAGE: &str = "default_images/it_news_default.webp";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    summary: String,
    content: String,
    image: String,
    published: bool,
    moderation_status: String,
    category_id: i64,
    author_id: i64,
    views: i64,
    comment_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            summary: ArticleSummary::new(row.summary)?,
            content: ArticleBody::new(row.content)?,
            image: row.image,
            published: row.published,
            moderation_status: row.moderation_status.parse()?,
            category_id: CategoryId::new(row.category_id)?,
            author_id: UserId::new(row.author_id)?,
            views: row.views,
            comment_count: row.comment_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            summary,
            content,
            image,
            published,
            moderation_status,
            category_id,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, summary, content, image, published, \
                 moderation_status, category_id, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {ARTICLE_COLUMNS}",
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary.as_str())
        .bind(content.as_str())
        .bind(image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()))
        .bind(published)
        .bind(moderation_status.as_str())
        .bind(i64::from(category_id))
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            summary,
            content,
            image,
            category_id,
            published,
            moderation_status,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(summary) = summary {
            let summary_str: String = summary.into();
            builder.push(", summary = ");
            builder.push_bind(summary_str);
        }

        if let Some(content) = content {
            let content_str: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content_str);
        }

        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        if let Some(status) = moderation_status {
            builder.push(", moderation_status = ");
            builder.push_bind(status.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<i64> {
        let views: Option<i64> =
            sqlx::query_scalar("UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING views")
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        views.ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleListFilter) {
        match filter {
            ArticleListFilter::Public => {
                builder.push(" WHERE a.published = TRUE AND a.moderation_status = ");
                builder.push_bind(ModerationStatus::NotModeration.as_str());
            }
            ArticleListFilter::Category(slug) => {
                builder.push(" WHERE a.published = TRUE AND a.moderation_status = ");
                builder.push_bind(ModerationStatus::NotModeration.as_str());
                builder.push(" AND c.slug = ");
                builder.push_bind(slug.as_str());
            }
            ArticleListFilter::Author { author_id, state } => {
                builder.push(" WHERE a.author_id = ");
                builder.push_bind(i64::from(*author_id));
                match state {
                    AuthorArticleState::Published => {
                        builder.push(" AND a.published = TRUE AND a.moderation_status = ");
                        builder.push_bind(ModerationStatus::NotModeration.as_str());
                    }
                    AuthorArticleState::Draft => {
                        builder.push(" AND a.published = FALSE AND a.moderation_status = ");
                        builder.push_bind(ModerationStatus::NotModeration.as_str());
                    }
                    AuthorArticleState::InModeration => {
                        builder.push(" AND a.moderation_status = ");
                        builder.push_bind(ModerationStatus::Moderation.as_str());
                    }
                    AuthorArticleState::Rejected => {
                        builder.push(" AND a.moderation_status = ");
                        builder.push_bind(ModerationStatus::ErrorModeration.as_str());
                    }
                }
            }
            ArticleListFilter::ModerationQueue => {
                builder.push(" WHERE a.moderation_status = ");
                builder.push_bind(ModerationStatus::Moderation.as_str());
            }
        }
    }

    fn apply_cursor<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        cursor: Option<&'a ArticleListCursor>,
    ) {
        if let Some(cursor) = cursor {
            builder.push(" AND (a.created_at, a.id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.article_id));
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1",
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1",
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = (limit as i64) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT a.id, a.title, a.slug, a.summary, a.content, a.image, a.published, \
                 a.moderation_status, a.category_id, a.author_id, a.views, a.comment_count, \
                 a.created_at, a.updated_at FROM articles a",
        );
        if matches!(filter, ArticleListFilter::Category(_)) {
            builder.push(" JOIN categories c ON c.id = a.category_id");
        }
        Self::apply_filter(&mut builder, &filter);
        Self::apply_cursor(&mut builder, cursor.as_ref());
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(ArticleListCursor::from_parts(last.created_at, last.id));
            }
        }

        Ok((articles, next_cursor))
    }
}
