use crate::domain::reaction::ReactionTally;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReactionTallyDto {
    pub likes: i64,
    pub dislikes: i64,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
}

impl From<ReactionTally> for ReactionTallyDto {
    fn from(tally: ReactionTally) -> Self {
        Self {
            likes: tally.likes,
            dislikes: tally.dislikes,
            liked_by: tally.liked_by,
            disliked_by: tally.disliked_by,
        }
    }
}
