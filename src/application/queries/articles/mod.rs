mod get_by_slug;
mod list;
mod service;

pub use list::{ListAuthorArticlesQuery, PageRequest};
pub use service::ArticleQueryService;
