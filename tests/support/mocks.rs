// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use pandora_core::application::ApplicationResult;
use pandora_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use pandora_core::application::error::ApplicationError;
use pandora_core::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::SlugGenerator,
};
use pandora_core::domain::article::{
    Article, ArticleId, ArticleListCursor, ArticleListFilter, ArticleReadRepository,
    ArticleSlug, ArticleUpdate, ArticleWriteRepository, AuthorArticleState, ModerationStatus,
    NewArticle,
};
use pandora_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, NewCategory,
};
use pandora_core::domain::comment::{
    Comment, CommentId, CommentRepository, NewComment,
};
use pandora_core::domain::errors::{DomainError, DomainResult};
use pandora_core::domain::moderation::{
    ModerationMessage, ModerationMessageId, ModerationMessageRepository, NewModerationMessage,
};
use pandora_core::domain::reaction::{
    ArticleReactionRepository, CommentReactionRepository, ReactionKind, ReactionTally,
};
use pandora_core::domain::user::{
    NewUser, User, UserId, UserRepository, UserUpdate, Username,
};

pub fn test_username(id: i64) -> String {
    format!("user-{id}")
}

// ---------------------------------------------------------------------------
// Users

#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUsers {
    pub fn seed(&self, user: User) {
        let id = i64::from(user.id);
        self.next_id.fetch_max(id, Ordering::SeqCst);
        self.inner.lock().unwrap().insert(id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(DomainError::Conflict("username already taken".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        inner.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        Ok(user.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }
}

// ---------------------------------------------------------------------------
// Articles (one store serving both the read and the write trait)

#[derive(Default)]
pub struct InMemoryArticles {
    inner: Mutex<HashMap<i64, Article>>,
    category_slugs: Mutex<HashMap<String, i64>>,
    next_id: AtomicI64,
}

impl InMemoryArticles {
    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id, Ordering::SeqCst);
        self.inner.lock().unwrap().insert(id, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    /// Teach the store which category id a slug resolves to, for the
    /// category listing filter.
    pub fn map_category(&self, slug: &str, category_id: i64) {
        self.category_slugs
            .lock()
            .unwrap()
            .insert(slug.to_string(), category_id);
    }

    pub fn bump_comment_count(&self, id: i64) {
        if let Some(article) = self.inner.lock().unwrap().get_mut(&id) {
            article.comment_count += 1;
        }
    }

    fn matches(&self, article: &Article, filter: &ArticleListFilter) -> bool {
        match filter {
            ArticleListFilter::Public => article.is_publicly_visible(),
            ArticleListFilter::Category(slug) => {
                let slugs = self.category_slugs.lock().unwrap();
                article.is_publicly_visible()
                    && slugs.get(slug) == Some(&i64::from(article.category_id))
            }
            ArticleListFilter::Author { author_id, state } => {
                article.author_id == *author_id
                    && match state {
                        AuthorArticleState::Published => {
                            article.published
                                && article.moderation_status == ModerationStatus::NotModeration
                        }
                        AuthorArticleState::Draft => {
                            !article.published
                                && article.moderation_status == ModerationStatus::NotModeration
                        }
                        AuthorArticleState::InModeration => {
                            article.moderation_status == ModerationStatus::Moderation
                        }
                        AuthorArticleState::Rejected => {
                            article.moderation_status == ModerationStatus::ErrorModeration
                        }
                    }
            }
            ArticleListFilter::ModerationQueue => {
                article.moderation_status == ModerationStatus::Moderation
            }
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            content: article.content,
            image: article
                .image
                .unwrap_or_else(|| "default_images/it_news_default.webp".into()),
            published: article.published,
            moderation_status: article.moderation_status,
            category_id: article.category_id,
            author_id: article.author_id,
            views: 0,
            comment_count: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.inner.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let article = inner
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(summary) = update.summary {
            article.summary = summary;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(image) = update.image {
            article.image = image;
        }
        if let Some(category_id) = update.category_id {
            article.category_id = category_id;
        }
        if let Some(published) = update.published {
            article.published = published;
        }
        if let Some(status) = update.moderation_status {
            article.moderation_status = status;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<i64> {
        let mut inner = self.inner.lock().unwrap();
        let article = inner
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.views += 1;
        Ok(article.views)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|article| article.slug == *slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let mut items: Vec<Article> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|article| self.matches(article, &filter))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        if let Some(cursor) = cursor {
            let key = (cursor.created_at, i64::from(cursor.article_id));
            items.retain(|article| (article.created_at, i64::from(article.id)) < key);
        }
        let has_more = items.len() > limit as usize;
        items.truncate(limit as usize);
        let next = if has_more {
            items
                .last()
                .map(|article| ArticleListCursor::from_parts(article.created_at, article.id))
        } else {
            None
        };
        Ok((items, next))
    }
}

// ---------------------------------------------------------------------------
// Categories

#[derive(Default)]
pub struct InMemoryCategories {
    inner: Mutex<HashMap<i64, Category>>,
    next_id: AtomicI64,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut inner = self.inner.lock().unwrap();
        if inner.values().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Category {
            id: CategoryId::new(id)?,
            title: category.title,
            slug: category.slug,
        };
        inner.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|category| category.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.inner.lock().unwrap().values().cloned().collect();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(categories)
    }
}

// ---------------------------------------------------------------------------
// Comments

pub struct InMemoryComments {
    articles: Arc<InMemoryArticles>,
    inner: Mutex<HashMap<i64, Comment>>,
    next_id: AtomicI64,
}

impl InMemoryComments {
    pub fn new(articles: Arc<InMemoryArticles>) -> Self {
        Self {
            articles,
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_id: comment.author_id,
            author_username: test_username(i64::from(comment.author_id)),
            text: comment.text,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        self.inner.lock().unwrap().insert(id, stored.clone());
        self.articles
            .bump_comment_count(i64::from(comment.article_id));
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        Ok(comments)
    }
}

// ---------------------------------------------------------------------------
// Reactions (serves both the article and the comment trait)

#[derive(Default)]
pub struct InMemoryReactions {
    inner: Mutex<HashMap<(i64, i64), ReactionKind>>,
}

impl InMemoryReactions {
    fn toggle_entry(&self, target: i64, user: i64, kind: ReactionKind) -> ReactionTally {
        let mut inner = self.inner.lock().unwrap();
        match inner.get(&(target, user)).copied() {
            Some(existing) if existing == kind => {
                inner.remove(&(target, user));
            }
            _ => {
                inner.insert((target, user), kind);
            }
        }
        Self::tally_entries(&inner, target)
    }

    fn tally_for(&self, target: i64) -> ReactionTally {
        Self::tally_entries(&self.inner.lock().unwrap(), target)
    }

    fn tally_entries(
        entries: &HashMap<(i64, i64), ReactionKind>,
        target: i64,
    ) -> ReactionTally {
        let mut tally = ReactionTally::default();
        for (key, kind) in entries {
            if key.0 != target {
                continue;
            }
            match kind {
                ReactionKind::Like => {
                    tally.likes += 1;
                    tally.liked_by.push(test_username(key.1));
                }
                ReactionKind::Dislike => {
                    tally.dislikes += 1;
                    tally.disliked_by.push(test_username(key.1));
                }
            }
        }
        tally.liked_by.sort();
        tally.disliked_by.sort();
        tally
    }
}

#[async_trait]
impl ArticleReactionRepository for InMemoryReactions {
    async fn toggle(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally> {
        Ok(self.toggle_entry(i64::from(article_id), i64::from(user_id), kind))
    }

    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally> {
        Ok(self.tally_for(i64::from(article_id)))
    }
}

#[async_trait]
impl CommentReactionRepository for InMemoryReactions {
    async fn toggle(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally> {
        Ok(self.toggle_entry(i64::from(comment_id), i64::from(user_id), kind))
    }

    async fn tally(&self, comment_id: CommentId) -> DomainResult<ReactionTally> {
        Ok(self.tally_for(i64::from(comment_id)))
    }
}

// ---------------------------------------------------------------------------
// Moderation messages

#[derive(Default)]
pub struct InMemoryModerationMessages {
    inner: Mutex<Vec<ModerationMessage>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ModerationMessageRepository for InMemoryModerationMessages {
    async fn insert(&self, message: NewModerationMessage) -> DomainResult<ModerationMessage> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = ModerationMessage {
            id: ModerationMessageId::new(id)?,
            article_id: message.article_id,
            author_id: message.author_id,
            text: message.text,
            is_active: true,
            created_at: message.created_at,
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_active_for_author(
        &self,
        author_id: UserId,
    ) -> DomainResult<Vec<ModerationMessage>> {
        let mut messages: Vec<ModerationMessage> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|message| message.is_active && message.author_id == author_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn deactivate(&self, id: ModerationMessageId, author_id: UserId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let message = inner
            .iter_mut()
            .find(|message| message.id == id && message.author_id == author_id)
            .ok_or_else(|| DomainError::NotFound("moderation message not found".into()))?;
        message.is_active = false;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Ports

pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = Utc::now();
        Ok(AuthTokenDto {
            token: format!("token-{}", subject.username),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized("invalid token"))
    }
}

pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct TransliteratingSlug;

impl SlugGenerator for TransliteratingSlug {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
