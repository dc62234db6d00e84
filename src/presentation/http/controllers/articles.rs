// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ApproveArticleCommand, CreateArticleCommand, DeleteArticleCommand,
        DismissModerationMessageCommand, ReactToArticleCommand, RejectArticleCommand,
        SubmitForModerationCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, CursorPage, ModerationMessageDto, ReactionTallyDto},
    queries::{ListAuthorArticlesQuery, PageRequest},
};
use crate::domain::{article::AuthorArticleState, reaction::ReactionKind};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self {
            limit: params.limit,
            cursor: params.cursor,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AuthorArticleParams {
    pub state: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectArticleRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReactionRequest {
    pub kind: ReactionKind,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = CursorPage<ArticleDto>)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_public(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article detail. Public reads bump the view counter.", body = ArticleDto),
        (status = 404, description = "No visible article under this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_slug(actor.0.as_ref(), &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created with a generated slug.", body = ArticleDto),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        image: payload.image,
        category_id: payload.category_id,
        publish: payload.publish,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 404, description = "Article missing or owned by someone else.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent update or publish blocked by the moderation workflow.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        image: payload.image,
        category_id: payload.category_id,
        publish: payload.publish,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 404, description = "Article missing or owned by someone else.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/submit",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article queued for review.", body = ArticleDto),
        (status = 409, description = "Article is already awaiting moderation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn submit_for_moderation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .submit_for_moderation(&user, SubmitForModerationCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/approve",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article approved and published.", body = ArticleDto),
        (status = 403, description = "Caller may not moderate.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is not awaiting moderation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/reject",
    params(("id" = i64, Path, description = "Article id")),
    request_body = RejectArticleRequest,
    responses(
        (status = 200, description = "Article rejected; a message is left for the author.", body = ArticleDto),
        (status = 403, description = "Caller may not moderate.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is not awaiting moderation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<RejectArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .reject_article(
            &user,
            RejectArticleCommand {
                id,
                message: payload.message,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/moderation/queue",
    params(PageParams),
    responses(
        (status = 200, description = "Articles awaiting review.", body = CursorPage<ArticleDto>),
        (status = 403, description = "Caller may not moderate.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn moderation_queue(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .moderation_queue(&user, params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/moderation/messages",
    responses(
        (status = 200, description = "Active rejection messages for the caller.", body = [ModerationMessageDto])
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn list_moderation_messages(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ModerationMessageDto>>> {
    state
        .services
        .moderation_queries
        .my_messages(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/moderation/messages/{id}/dismiss",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message dismissed."),
        (status = 404, description = "No active message with this id for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn dismiss_moderation_message(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .dismiss_moderation_message(&user, DismissModerationMessageCommand { message_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "dismissed" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}/articles",
    params(
        ("id" = i64, Path, description = "Author id"),
        AuthorArticleParams
    ),
    responses(
        (status = 200, description = "One workflow bucket of an author's articles.", body = CursorPage<ArticleDto>),
        (status = 403, description = "Caller may not browse this bucket.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_author_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<AuthorArticleParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    let article_state: AuthorArticleState = params
        .state
        .parse()
        .map_err(|err: crate::domain::errors::DomainError| {
            HttpError::from_error(err.into())
        })?;

    let query = ListAuthorArticlesQuery {
        author_id: id,
        state: article_state,
        page: PageRequest {
            limit: params.limit,
            cursor: params.cursor,
        },
    };

    state
        .services
        .article_queries
        .list_by_author(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/reactions",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Current like/dislike tally.", body = ReactionTallyDto),
        (status = 404, description = "No visible article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reactions"
)]
pub async fn article_reactions(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ReactionTallyDto>> {
    state
        .services
        .article_queries
        .reaction_tally(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/reactions",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ReactionRequest,
    responses(
        (status = 200, description = "Reaction toggled; the new tally is returned.", body = ReactionTallyDto),
        (status = 404, description = "No visible article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reactions"
)]
pub async fn react_to_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ReactionRequest>,
) -> HttpResult<Json<ReactionTallyDto>> {
    state
        .services
        .article_commands
        .react_to_article(
            &user,
            ReactToArticleCommand {
                id,
                kind: payload.kind,
            },
        )
        .await
        .into_http()
        .map(Json)
}
