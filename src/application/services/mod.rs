// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            ArticleQueryService, CategoryQueryService, CommentQueryService,
            ModerationQueryService, UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::CategoryRepository,
        comment::CommentRepository,
        moderation::ModerationMessageRepository,
        reaction::{ArticleReactionRepository, CommentReactionRepository},
        user::UserRepository,
    },
};

/// Everything the HTTP layer needs, wired once at startup.
pub struct ApplicationServices {
    pub article_commands: ArticleCommandService,
    pub article_queries: ArticleQueryService,
    pub category_commands: CategoryCommandService,
    pub category_queries: CategoryQueryService,
    pub comment_commands: CommentCommandService,
    pub comment_queries: CommentQueryService,
    pub moderation_queries: ModerationQueryService,
    pub user_commands: UserCommandService,
    pub user_queries: UserQueryService,
    token_manager: Arc<dyn TokenManager>,
}

pub struct ApplicationDependencies {
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_reaction_repo: Arc<dyn ArticleReactionRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub comment_reaction_repo: Arc<dyn CommentReactionRepository>,
    pub moderation_repo: Arc<dyn ModerationMessageRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub slug_generator: Arc<dyn SlugGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.slug_generator),
        ));

        Self {
            article_commands: ArticleCommandService::new(
                Arc::clone(&deps.article_write_repo),
                Arc::clone(&deps.article_read_repo),
                Arc::clone(&deps.category_repo),
                Arc::clone(&deps.moderation_repo),
                Arc::clone(&deps.article_reaction_repo),
                slug_service,
                Arc::clone(&deps.clock),
            ),
            article_queries: ArticleQueryService::new(
                Arc::clone(&deps.article_read_repo),
                Arc::clone(&deps.article_write_repo),
                Arc::clone(&deps.category_repo),
                Arc::clone(&deps.article_reaction_repo),
            ),
            category_commands: CategoryCommandService::new(
                Arc::clone(&deps.category_repo),
                Arc::clone(&deps.slug_generator),
            ),
            category_queries: CategoryQueryService::new(Arc::clone(&deps.category_repo)),
            comment_commands: CommentCommandService::new(
                Arc::clone(&deps.comment_repo),
                Arc::clone(&deps.article_read_repo),
                Arc::clone(&deps.comment_reaction_repo),
                Arc::clone(&deps.clock),
            ),
            comment_queries: CommentQueryService::new(
                Arc::clone(&deps.comment_repo),
                Arc::clone(&deps.article_read_repo),
                Arc::clone(&deps.comment_reaction_repo),
            ),
            moderation_queries: ModerationQueryService::new(Arc::clone(&deps.moderation_repo)),
            user_commands: UserCommandService::new(
                Arc::clone(&deps.user_repo),
                Arc::clone(&deps.password_hasher),
                Arc::clone(&deps.token_manager),
                Arc::clone(&deps.clock),
            ),
            user_queries: UserQueryService::new(Arc::clone(&deps.user_repo)),
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> &Arc<dyn TokenManager> {
        &self.token_manager
    }
}
