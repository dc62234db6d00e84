use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub is_child: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<CommentDto>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        let is_child = comment.is_child();
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            author_username: comment.author_username.clone(),
            text: comment.text.into(),
            parent_id: comment.parent_id.map(i64::from),
            is_child,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            replies: Vec::new(),
        }
    }
}

/// Assemble a flat, newest-first comment list into a tree. Roots keep the
/// input order; replies are nested under their parents oldest-first so a
/// thread reads top to bottom.
pub fn build_comment_tree(comments: Vec<Comment>) -> Vec<CommentDto> {
    let mut children: HashMap<i64, Vec<Comment>> = HashMap::new();
    let mut roots: Vec<Comment> = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent) => children.entry(i64::from(parent)).or_default().push(comment),
            None => roots.push(comment),
        }
    }

    for replies in children.values_mut() {
        replies.sort_by_key(|c| c.created_at);
    }

    roots
        .into_iter()
        .map(|root| attach_replies(root, &mut children))
        .collect()
}

fn attach_replies(comment: Comment, children: &mut HashMap<i64, Vec<Comment>>) -> CommentDto {
    let id = i64::from(comment.id);
    let mut dto = CommentDto::from(comment);
    if let Some(replies) = children.remove(&id) {
        dto.replies = replies
            .into_iter()
            .map(|reply| attach_replies(reply, children))
            .collect();
    }
    dto
}
