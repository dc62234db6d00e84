pub mod articles;
pub mod categories;
pub mod comments;
pub mod moderation;
pub mod users;

pub use articles::{ArticleQueryService, ListAuthorArticlesQuery, PageRequest};
pub use categories::CategoryQueryService;
pub use comments::CommentQueryService;
pub use moderation::ModerationQueryService;
pub use users::UserQueryService;
