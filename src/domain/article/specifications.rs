use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities.iter().any(|cap| cap.matches(resource, action))
}

pub struct CanUpdateArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "update:any")
            || (has_capability(self.capabilities, "articles", "update:own")
                && self.article.author_id == self.user_id)
    }
}

pub struct CanDeleteArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "delete:any")
            || (has_capability(self.capabilities, "articles", "delete:own")
                && self.article.author_id == self.user_id)
    }
}

pub struct CanViewUnpublishedArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanViewUnpublishedArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "view:drafts")
            || self.article.author_id == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleId, ArticleSlug, ArticleSummary, ArticleTitle, ModerationStatus,
    };
    use crate::domain::category::CategoryId;
    use crate::domain::user::Role;
    use chrono::Utc;

    fn article_by(author: i64) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            slug: ArticleSlug::new("t-00001").unwrap(),
            summary: ArticleSummary::new("s").unwrap(),
            content: ArticleBody::new("c").unwrap(),
            image: String::new(),
            published: false,
            moderation_status: ModerationStatus::NotModeration,
            category_id: CategoryId::new(1).unwrap(),
            author_id: UserId::new(author).unwrap(),
            views: 0,
            comment_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_may_update_own_article_only() {
        let caps = Role::Author.default_capabilities();
        let article = article_by(7);
        assert!(CanUpdateArticleSpec::new(&caps, &article, UserId::new(7).unwrap()).is_satisfied());
        assert!(
            !CanUpdateArticleSpec::new(&caps, &article, UserId::new(8).unwrap()).is_satisfied()
        );
    }

    #[test]
    fn admin_may_delete_any_article() {
        let caps = Role::Admin.default_capabilities();
        let article = article_by(7);
        assert!(CanDeleteArticleSpec::new(&caps, &article, UserId::new(1).unwrap()).is_satisfied());
    }

    #[test]
    fn moderator_may_view_unpublished() {
        let caps = Role::Moderator.default_capabilities();
        let article = article_by(7);
        assert!(
            CanViewUnpublishedArticleSpec::new(&caps, &article, UserId::new(2).unwrap())
                .is_satisfied()
        );
    }
}
