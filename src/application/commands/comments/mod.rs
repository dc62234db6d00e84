mod create;
mod react;
mod service;

pub use create::CreateCommentCommand;
pub use react::ReactToCommentCommand;
pub use service::CommentCommandService;
