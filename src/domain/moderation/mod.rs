pub mod entity;
pub mod repository;

pub use entity::{ModerationMessage, ModerationMessageId, NewModerationMessage};
pub use repository::ModerationMessageRepository;
