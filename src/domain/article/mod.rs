pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleListFilter, ArticleReadRepository, ArticleWriteRepository, AuthorArticleState,
};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleListCursor, ArticleSlug, ArticleSummary, ArticleTitle,
    ModerationStatus,
};
