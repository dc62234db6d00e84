pub mod article;
pub mod category;
pub mod comment;
pub mod errors;
pub mod moderation;
pub mod reaction;
pub mod user;
