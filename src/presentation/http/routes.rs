// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, categories, comments},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/users/{id}/role", patch(auth::grant_role))
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/{slug}/articles",
            get(categories::list_category_articles),
        )
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            put(articles::update_article).delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/submit",
            post(articles::submit_for_moderation),
        )
        .route(
            "/api/v1/articles/{id}/approve",
            post(articles::approve_article),
        )
        .route(
            "/api/v1/articles/{id}/reject",
            post(articles::reject_article),
        )
        .route(
            "/api/v1/articles/{id}/reactions",
            get(articles::article_reactions).post(articles::react_to_article),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/v1/comments/{id}/reactions",
            get(comments::comment_reactions).post(comments::react_to_comment),
        )
        .route(
            "/api/v1/authors/{id}/articles",
            get(articles::list_author_articles),
        )
        .route("/api/v1/moderation/queue", get(articles::moderation_queue))
        .route(
            "/api/v1/moderation/messages",
            get(articles::list_moderation_messages),
        )
        .route(
            "/api/v1/moderation/messages/{id}/dismiss",
            post(articles::dismiss_moderation_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
