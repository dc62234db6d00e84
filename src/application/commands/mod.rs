pub mod articles;
pub mod categories;
pub mod comments;
pub mod users;

mod capability;
