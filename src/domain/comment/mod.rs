pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId, CommentText, NewComment};
pub use repository::CommentRepository;
