// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, ReactToCommentCommand},
    dto::{CommentDto, ReactionTallyDto},
};
use crate::presentation::http::controllers::articles::ReactionRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Threaded comments, newest threads first.", body = [CommentDto]),
        (status = 404, description = "No visible article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_article(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Empty text or a parent from another article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No visible article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = CreateCommentCommand {
        article_id: id,
        text: payload.text,
        parent_id: payload.parent_id,
    };

    state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}/reactions",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Current like/dislike tally.", body = ReactionTallyDto),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reactions"
)]
pub async fn comment_reactions(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ReactionTallyDto>> {
    state
        .services
        .comment_queries
        .reaction_tally(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/reactions",
    params(("id" = i64, Path, description = "Comment id")),
    request_body = ReactionRequest,
    responses(
        (status = 200, description = "Reaction toggled; the new tally is returned.", body = ReactionTallyDto),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reactions"
)]
pub async fn react_to_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ReactionRequest>,
) -> HttpResult<Json<ReactionTallyDto>> {
    state
        .services
        .comment_commands
        .react_to_comment(
            &user,
            ReactToCommentCommand {
                id,
                kind: payload.kind,
            },
        )
        .await
        .into_http()
        .map(Json)
}
