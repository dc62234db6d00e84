// tests/article_visibility.rs
mod support;

use std::sync::Arc;

use pandora_core::application::error::ApplicationError;
use pandora_core::application::queries::{
    ArticleQueryService, ListAuthorArticlesQuery, PageRequest,
};
use pandora_core::domain::article::AuthorArticleState;
use pandora_core::domain::category::{
    CategoryRepository, CategorySlug, CategoryTitle, NewCategory,
};
use pandora_core::domain::user::Role;

use support::{ArticleBuilder, InMemoryArticles, InMemoryCategories, InMemoryReactions, actor};

struct Library {
    queries: ArticleQueryService,
    articles: Arc<InMemoryArticles>,
    categories: Arc<InMemoryCategories>,
}

fn library() -> Library {
    let articles = Arc::new(InMemoryArticles::default());
    let categories = Arc::new(InMemoryCategories::default());
    let reactions = Arc::new(InMemoryReactions::default());

    let queries = ArticleQueryService::new(
        articles.clone(),
        articles.clone(),
        categories.clone(),
        reactions,
    );

    Library {
        queries,
        articles,
        categories,
    }
}

fn page(limit: u32, cursor: Option<String>) -> PageRequest {
    PageRequest {
        limit: Some(limit),
        cursor,
    }
}

#[tokio::test]
async fn public_reads_count_views() {
    let lib = library();
    lib.articles.seed(
        ArticleBuilder::new(1)
            .author(1)
            .published()
            .slug("rustc-release-00001")
            .build(),
    );

    let first = lib
        .queries
        .get_by_slug(None, "rustc-release-00001")
        .await
        .expect("public read");
    assert_eq!(first.views, 1);

    let second = lib
        .queries
        .get_by_slug(None, "rustc-release-00001")
        .await
        .unwrap();
    assert_eq!(second.views, 2);
}

#[tokio::test]
async fn drafts_stay_invisible_to_anonymous_readers() {
    let lib = library();
    lib.articles
        .seed(ArticleBuilder::new(1).author(1).slug("draft-00001").build());

    let err = lib.queries.get_by_slug(None, "draft-00001").await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // The author and draft viewers see it, without counting a view.
    let author = actor(1, Role::Author);
    let seen = lib
        .queries
        .get_by_slug(Some(&author), "draft-00001")
        .await
        .expect("author read");
    assert_eq!(seen.views, 0);

    let moderator = actor(2, Role::Moderator);
    lib.queries
        .get_by_slug(Some(&moderator), "draft-00001")
        .await
        .expect("moderator read");

    let stranger = actor(3, Role::Author);
    let err = lib
        .queries
        .get_by_slug(Some(&stranger), "draft-00001")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn public_listing_skips_unpublished_and_queued_articles() {
    let lib = library();
    lib.articles
        .seed(ArticleBuilder::new(1).author(1).published().build());
    lib.articles
        .seed(ArticleBuilder::new(2).author(1).slug("draft-00002").build());
    lib.articles.seed(
        ArticleBuilder::new(3)
            .author(1)
            .in_moderation()
            .slug("queued-00003")
            .build(),
    );

    let listed = lib
        .queries
        .list_public(PageRequest::default())
        .await
        .expect("list");
    assert_eq!(listed.items.len(), 1);
    assert_eq!(listed.items[0].id, 1);
    assert!(!listed.has_more);
}

#[tokio::test]
async fn public_listing_paginates_newest_first() {
    let lib = library();
    for (id, age) in [(1_i64, 30_i64), (2, 20), (3, 10)] {
        lib.articles.seed(
            ArticleBuilder::new(id)
                .author(1)
                .published()
                .slug(format!("story-{id:05}"))
                .age_minutes(age)
                .build(),
        );
    }

    let first = lib.queries.list_public(page(2, None)).await.unwrap();
    let ids: Vec<i64> = first.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert!(first.has_more);

    let second = lib
        .queries
        .list_public(page(2, first.next_cursor))
        .await
        .unwrap();
    let ids: Vec<i64> = second.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1]);
    assert!(!second.has_more);
}

#[tokio::test]
async fn garbage_cursors_are_rejected() {
    let lib = library();
    let err = lib
        .queries
        .list_public(page(2, Some("not-a-cursor".into())))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(_) | ApplicationError::Validation(_)
    ));
}

#[tokio::test]
async fn category_listing_filters_by_slug() {
    let lib = library();
    let rust = lib
        .categories
        .insert(NewCategory {
            title: CategoryTitle::new("Rust").unwrap(),
            slug: CategorySlug::new("rust").unwrap(),
        })
        .await
        .unwrap();
    lib.articles.map_category("rust", rust.id.into());
    lib.articles.seed(
        ArticleBuilder::new(1)
            .author(1)
            .published()
            .category(i64::from(rust.id))
            .build(),
    );
    lib.articles.seed(
        ArticleBuilder::new(2)
            .author(1)
            .published()
            .category(99)
            .slug("offtopic-00002")
            .build(),
    );

    let listed = lib
        .queries
        .list_by_category("rust".into(), PageRequest::default())
        .await
        .expect("list category");
    assert_eq!(listed.items.len(), 1);
    assert_eq!(listed.items[0].id, 1);

    let err = lib
        .queries
        .list_by_category("gardening".into(), PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn author_buckets_split_by_workflow_state() {
    let lib = library();
    lib.articles
        .seed(ArticleBuilder::new(1).author(1).published().build());
    lib.articles
        .seed(ArticleBuilder::new(2).author(1).slug("draft-00002").build());
    lib.articles.seed(
        ArticleBuilder::new(3)
            .author(1)
            .rejected()
            .slug("rejected-00003")
            .build(),
    );

    let author = actor(1, Role::Author);
    for (state, expected) in [
        (AuthorArticleState::Published, 1_i64),
        (AuthorArticleState::Draft, 2),
        (AuthorArticleState::Rejected, 3),
    ] {
        let listed = lib
            .queries
            .list_by_author(
                &author,
                ListAuthorArticlesQuery {
                    author_id: 1,
                    state,
                    page: PageRequest::default(),
                },
            )
            .await
            .expect("list bucket");
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].id, expected);
    }
}

#[tokio::test]
async fn unpublished_buckets_are_private_to_their_author() {
    let lib = library();
    lib.articles
        .seed(ArticleBuilder::new(1).author(1).slug("draft-00001").build());

    let stranger = actor(2, Role::Author);
    let err = lib
        .queries
        .list_by_author(
            &stranger,
            ListAuthorArticlesQuery {
                author_id: 1,
                state: AuthorArticleState::Draft,
                page: PageRequest::default(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    // The published bucket is open to any authenticated reader.
    lib.queries
        .list_by_author(
            &stranger,
            ListAuthorArticlesQuery {
                author_id: 1,
                state: AuthorArticleState::Published,
                page: PageRequest::default(),
            },
        )
        .await
        .expect("published bucket");

    // Draft viewers may browse any bucket.
    let moderator = actor(3, Role::Moderator);
    let listed = lib
        .queries
        .list_by_author(
            &moderator,
            ListAuthorArticlesQuery {
                author_id: 1,
                state: AuthorArticleState::Draft,
                page: PageRequest::default(),
            },
        )
        .await
        .expect("moderator browse");
    assert_eq!(listed.items.len(), 1);
}

#[tokio::test]
async fn moderation_queue_requires_moderation_rights() {
    let lib = library();
    lib.articles.seed(
        ArticleBuilder::new(1)
            .author(1)
            .in_moderation()
            .slug("queued-00001")
            .build(),
    );

    let author = actor(1, Role::Author);
    let err = lib
        .queries
        .moderation_queue(&author, PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let moderator = actor(2, Role::Moderator);
    let queue = lib
        .queries
        .moderation_queue(&moderator, PageRequest::default())
        .await
        .expect("queue");
    assert_eq!(queue.items.len(), 1);
    assert_eq!(queue.items[0].id, 1);
}
