// src/infrastructure/repositories/postgres_reaction.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::reaction::{
    ArticleReactionRepository, CommentReactionRepository, ReactionKind, ReactionTally,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone, Copy)]
struct ReactionTable {
    table: &'static str,
    target_column: &'static str,
}

const ARTICLE_REACTIONS: ReactionTable = ReactionTable {
    table: "article_reactions",
    target_column: "article_id",
};

const COMMENT_REACTIONS: ReactionTable = ReactionTable {
    table: "comment_reactions",
    target_column: "comment_id",
};

#[derive(Debug, FromRow)]
struct ReactionRow {
    username: String,
    reaction: String,
}

async fn toggle_reaction(
    pool: &PgPool,
    table: ReactionTable,
    target_id: i64,
    user_id: UserId,
    kind: ReactionKind,
) -> DomainResult<ReactionTally> {
    let ReactionTable {
        table,
        target_column,
    } = table;

    let mut tx = pool.begin().await.map_err(map_sqlx)?;

    let existing: Option<String> = sqlx::query_scalar(&format!(
        "SELECT reaction FROM {table} WHERE {target_column} = $1 AND user_id = $2 FOR UPDATE",
    ))
    .bind(target_id)
    .bind(i64::from(user_id))
    .fetch_optional(&mut *tx)
    .await
    .map_err(map_sqlx)?;

    match existing.as_deref() {
        // Repeating a reaction withdraws it.
        Some(current) if current == kind.as_str() => {
            sqlx::query(&format!(
                "DELETE FROM {table} WHERE {target_column} = $1 AND user_id = $2",
            ))
            .bind(target_id)
            .bind(i64::from(user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
        // The opposite reaction replaces the current one.
        Some(_) => {
            sqlx::query(&format!(
                "UPDATE {table} SET reaction = $3 WHERE {target_column} = $1 AND user_id = $2",
            ))
            .bind(target_id)
            .bind(i64::from(user_id))
            .bind(kind.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
        None => {
            sqlx::query(&format!(
                "INSERT INTO {table} ({target_column}, user_id, reaction, created_at)
                 VALUES ($1, $2, $3, NOW())",
            ))
            .bind(target_id)
            .bind(i64::from(user_id))
            .bind(kind.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
    }

    let rows = fetch_reaction_rows(&mut tx, table, target_column, target_id).await?;
    tx.commit().await.map_err(map_sqlx)?;

    Ok(tally_from_rows(rows))
}

async fn fetch_reaction_rows(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    table: &str,
    target_column: &str,
    target_id: i64,
) -> DomainResult<Vec<ReactionRow>> {
    sqlx::query_as::<_, ReactionRow>(&format!(
        "SELECT u.username, r.reaction FROM {table} r
         JOIN users u ON u.id = r.user_id
         WHERE r.{target_column} = $1
         ORDER BY u.username ASC",
    ))
    .bind(target_id)
    .fetch_all(&mut **tx)
    .await
    .map_err(map_sqlx)
}

async fn fetch_tally(pool: &PgPool, table: ReactionTable, target_id: i64) -> DomainResult<ReactionTally> {
    let ReactionTable {
        table,
        target_column,
    } = table;

    let rows = sqlx::query_as::<_, ReactionRow>(&format!(
        "SELECT u.username, r.reaction FROM {table} r
         JOIN users u ON u.id = r.user_id
         WHERE r.{target_column} = $1
         ORDER BY u.username ASC",
    ))
    .bind(target_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    Ok(tally_from_rows(rows))
}

fn tally_from_rows(rows: Vec<ReactionRow>) -> ReactionTally {
    let mut tally = ReactionTally::default();
    for row in rows {
        if row.reaction == ReactionKind::Like.as_str() {
            tally.likes += 1;
            tally.liked_by.push(row.username);
        } else {
            tally.dislikes += 1;
            tally.disliked_by.push(row.username);
        }
    }
    tally
}

#[derive(Clone)]
pub struct PostgresArticleReactionRepository {
    pool: PgPool,
}

impl PostgresArticleReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleReactionRepository for PostgresArticleReactionRepository {
    async fn toggle(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally> {
        toggle_reaction(
            &self.pool,
            ARTICLE_REACTIONS,
            i64::from(article_id),
            user_id,
            kind,
        )
        .await
    }

    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally> {
        fetch_tally(&self.pool, ARTICLE_REACTIONS, i64::from(article_id)).await
    }
}

#[derive(Clone)]
pub struct PostgresCommentReactionRepository {
    pool: PgPool,
}

impl PostgresCommentReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentReactionRepository for PostgresCommentReactionRepository {
    async fn toggle(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally> {
        toggle_reaction(
            &self.pool,
            COMMENT_REACTIONS,
            i64::from(comment_id),
            user_id,
            kind,
        )
        .await
    }

    async fn tally(&self, comment_id: CommentId) -> DomainResult<ReactionTally> {
        fetch_tally(&self.pool, COMMENT_REACTIONS, i64::from(comment_id)).await
    }
}
