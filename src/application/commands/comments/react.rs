// src/application/commands/comments/react.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionTallyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, reaction::ReactionKind},
};

pub struct ReactToCommentCommand {
    pub id: i64,
    pub kind: ReactionKind,
}

impl CommentCommandService {
    pub async fn react_to_comment(
        &self,
        actor: &AuthenticatedUser,
        command: ReactToCommentCommand,
    ) -> ApplicationResult<ReactionTallyDto> {
        let id = CommentId::new(command.id)?;
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let tally = self.reaction_repo.toggle(id, actor.id, command.kind).await?;
        Ok(tally.into())
    }
}
