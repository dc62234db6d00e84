use anyhow::Result;
use pandora_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationDependencies, ApplicationServices},
};
use pandora_core::config::AppConfig;
use pandora_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    comment::CommentRepository,
    moderation::ModerationMessageRepository,
    reaction::{ArticleReactionRepository, CommentReactionRepository},
    user::UserRepository,
};
use pandora_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReactionRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresCategoryRepository,
        PostgresCommentReactionRepository, PostgresCommentRepository,
        PostgresModerationMessageRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use pandora_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(&config.database_url).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let article_reaction_repo: Arc<dyn ArticleReactionRepository> =
        Arc::new(PostgresArticleReactionRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let comment_reaction_repo: Arc<dyn CommentReactionRepository> =
        Arc::new(PostgresCommentReactionRepository::new(pool.clone()));
    let moderation_repo: Arc<dyn ModerationMessageRepository> =
        Arc::new(PostgresModerationMessageRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        &config.biscuit_private_key,
        config.token_ttl,
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slug_generator: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(ApplicationDependencies {
        article_read_repo,
        article_write_repo,
        article_reaction_repo,
        category_repo,
        comment_repo,
        comment_reaction_repo,
        moderation_repo,
        user_repo,
        password_hasher,
        token_manager,
        slug_generator,
        clock,
    }));

    let state = HttpState { services };
    let app = build_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
