// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategorySlug, CategoryTitle, NewCategory},
};

pub struct CreateCategoryCommand {
    pub title: String,
}

impl CategoryCommandService {
    /// Categories carry a plain transliterated slug; a duplicate title
    /// surfaces as a slug conflict from the unique constraint.
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let title = CategoryTitle::new(command.title)?;
        let raw_slug = self.slugger.slugify(title.as_str());
        if raw_slug.is_empty() {
            return Err(ApplicationError::validation(
                "category title does not produce a usable slug",
            ));
        }
        let slug = CategorySlug::new(raw_slug)?;

        let created = self
            .category_repo
            .insert(NewCategory { title, slug })
            .await?;
        Ok(created.into())
    }
}
