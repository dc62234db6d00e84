// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Number of leading title words kept in an article slug.
const SLUG_WORD_LIMIT: usize = 4;

/// Domain service responsible for producing unique slugs for articles.
///
/// An article slug is built from the transliterated title truncated to its
/// first four words, with a time-derived numeric suffix so that repeated
/// titles stay distinct. Uniqueness is still verified against the read
/// repository before handing the slug out.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base_slug = self.base_slug(title);

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.map(|id| id == existing.id).unwrap_or(false) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }

    fn base_slug(&self, title: &ArticleTitle) -> String {
        let now_millis = Utc::now().timestamp_millis();
        let suffix = time_suffix(now_millis);

        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return format!("article-{suffix}");
        }

        let truncated = base
            .split('-')
            .take(SLUG_WORD_LIMIT)
            .collect::<Vec<_>>()
            .join("-");
        format!("{truncated}-{suffix}")
    }
}

/// Last five digits of the epoch-millisecond timestamp, zero padded.
fn time_suffix(now_millis: i64) -> String {
    format!("{:05}", now_millis.rem_euclid(100_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::Article;
    use crate::domain::article::repository::ArticleListFilter;
    use crate::domain::article::value_objects::ArticleListCursor;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct FixedSlugs {
        taken: Mutex<HashSet<String>>,
    }

    #[async_trait]
    impl ArticleReadRepository for FixedSlugs {
        async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
            Ok(None)
        }

        async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
            // Prefix match, since the time suffix is not predictable here.
            let taken = self.taken.lock().unwrap();
            if taken.iter().any(|t| slug.as_str().starts_with(t.as_str())) {
                Ok(Some(sample_article(slug.as_str())))
            } else {
                Ok(None)
            }
        }

        async fn list_page(
            &self,
            _filter: ArticleListFilter,
            _limit: u32,
            _cursor: Option<ArticleListCursor>,
        ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
            Ok((vec![], None))
        }
    }

    fn sample_article(slug: &str) -> Article {
        use crate::domain::article::value_objects::{
            ArticleBody, ArticleSummary, ArticleTitle, ModerationStatus,
        };
        use crate::domain::category::CategoryId;
        use crate::domain::user::UserId;

        Article {
            id: ArticleId::new(99).unwrap(),
            title: ArticleTitle::new("taken").unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            summary: ArticleSummary::new("s").unwrap(),
            content: ArticleBody::new("c").unwrap(),
            image: String::new(),
            published: true,
            moderation_status: ModerationStatus::NotModeration,
            category_id: CategoryId::new(1).unwrap(),
            author_id: UserId::new(1).unwrap(),
            views: 0,
            comment_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct PassThroughSlugger;

    impl SlugGenerator for PassThroughSlugger {
        fn slugify(&self, input: &str) -> String {
            slug::slugify(input)
        }
    }

    fn service(taken: &[&str]) -> ArticleSlugService {
        ArticleSlugService::new(
            Arc::new(FixedSlugs {
                taken: Mutex::new(taken.iter().map(|s| s.to_string()).collect()),
            }),
            Arc::new(PassThroughSlugger),
        )
    }

    #[tokio::test]
    async fn slug_keeps_at_most_four_words() {
        let svc = service(&[]);
        let title = ArticleTitle::new("one two three four five six").unwrap();
        let slug = svc.generate_unique_slug(&title, None).await.unwrap();
        // four words plus the numeric suffix
        assert_eq!(slug.as_str().split('-').count(), 5);
        assert!(slug.as_str().starts_with("one-two-three-four-"));
    }

    /// Collides with every time-suffixed base candidate for "hello world"
    /// but leaves counter-extended candidates free.
    struct BaseCollider;

    #[async_trait]
    impl ArticleReadRepository for BaseCollider {
        async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
            Ok(None)
        }

        async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
            let taken = slug.as_str().starts_with("hello-world-")
                && slug.as_str().split('-').count() == 3;
            Ok(taken.then(|| sample_article(slug.as_str())))
        }

        async fn list_page(
            &self,
            _filter: ArticleListFilter,
            _limit: u32,
            _cursor: Option<ArticleListCursor>,
        ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
            Ok((vec![], None))
        }
    }

    #[tokio::test]
    async fn slug_appends_counter_on_collision() {
        let svc = ArticleSlugService::new(Arc::new(BaseCollider), Arc::new(PassThroughSlugger));
        let title = ArticleTitle::new("hello world").unwrap();
        let slug = svc.generate_unique_slug(&title, None).await.unwrap();
        assert!(slug.as_str().starts_with("hello-world-"));
        assert!(slug.as_str().ends_with("-1"));
    }

    #[tokio::test]
    async fn collision_with_ignored_id_returns_same_slug() {
        let svc = service(&["anything"]);
        let title = ArticleTitle::new("anything").unwrap();
        let slug = svc
            .generate_unique_slug(&title, Some(ArticleId::new(99).unwrap()))
            .await
            .unwrap();
        assert!(slug.as_str().starts_with("anything-"));
    }

    #[test]
    fn time_suffix_is_five_digits() {
        assert_eq!(time_suffix(1_700_000_012_345), "12345");
        assert_eq!(time_suffix(1_700_000_000_007), "00007");
    }
}
