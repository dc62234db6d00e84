// src/domain/reaction/mod.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::CommentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A user holds at most one reaction per target; liking replaces a
/// dislike and vice versa, repeating a reaction removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(DomainError::Validation(format!(
                "unknown reaction '{other}'"
            ))),
        }
    }
}

/// Aggregated reaction state for one article or comment.
#[derive(Debug, Clone, Default)]
pub struct ReactionTally {
    pub likes: i64,
    pub dislikes: i64,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
}

#[async_trait]
pub trait ArticleReactionRepository: Send + Sync {
    /// Toggle `kind` for `(article, user)` and return the resulting tally.
    async fn toggle(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally>;
    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally>;
}

#[async_trait]
pub trait CommentReactionRepository: Send + Sync {
    async fn toggle(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<ReactionTally>;
    async fn tally(&self, comment_id: CommentId) -> DomainResult<ReactionTally>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_kind_parses() {
        assert_eq!("like".parse::<ReactionKind>().unwrap(), ReactionKind::Like);
        assert_eq!(
            "dislike".parse::<ReactionKind>().unwrap(),
            ReactionKind::Dislike
        );
        assert!("meh".parse::<ReactionKind>().is_err());
    }
}
