pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod moderation;
pub mod pagination;
pub mod reactions;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use comments::{CommentDto, build_comment_tree};
pub use moderation::ModerationMessageDto;
pub use pagination::CursorPage;
pub use reactions::ReactionTallyDto;
pub use users::{CapabilityView, UserDto, UserProfileDto};
