// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod moderation;
mod react;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use moderation::{
    ApproveArticleCommand, DismissModerationMessageCommand, RejectArticleCommand,
    SubmitForModerationCommand,
};
pub use react::ReactToArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
