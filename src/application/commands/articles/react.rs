// src/application/commands/articles/react.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionTallyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, specifications::CanViewUnpublishedArticleSpec},
        reaction::ReactionKind,
    },
};

pub struct ReactToArticleCommand {
    pub id: i64,
    pub kind: ReactionKind,
}

impl ArticleCommandService {
    /// Toggle the caller's like/dislike on an article. Re-sending the same
    /// reaction removes it; the opposite reaction replaces it.
    pub async fn react_to_article(
        &self,
        actor: &AuthenticatedUser,
        command: ReactToArticleCommand,
    ) -> ApplicationResult<ReactionTallyDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_publicly_visible() {
            let spec =
                CanViewUnpublishedArticleSpec::new(&actor.capabilities, &article, actor.id);
            if !spec.is_satisfied() {
                return Err(ApplicationError::not_found("article not found"));
            }
        }

        let tally = self.reaction_repo.toggle(id, actor.id, command.kind).await?;
        Ok(tally.into())
    }
}
