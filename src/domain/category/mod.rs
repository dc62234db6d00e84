pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategorySlug, CategoryTitle, NewCategory};
pub use repository::CategoryRepository;
