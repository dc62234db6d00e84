// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_category;
mod postgres_comment;
mod postgres_moderation;
mod postgres_reaction;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_moderation::PostgresModerationMessageRepository;
pub use postgres_reaction::{
    PostgresArticleReactionRepository, PostgresCommentReactionRepository,
};
pub use postgres_user::PostgresUserRepository;
