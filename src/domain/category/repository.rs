use crate::domain::category::entity::{Category, CategoryId, CategorySlug, NewCategory};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    /// All categories, ordered by title.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
