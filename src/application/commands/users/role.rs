// src/application/commands/users/role.rs
use super::UserCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId, UserUpdate},
};

pub struct GrantRoleCommand {
    pub user_id: i64,
    pub role: Role,
}

impl UserCommandService {
    pub async fn grant_role(
        &self,
        actor: &AuthenticatedUser,
        command: GrantRoleCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "update")?;

        let user_id = UserId::new(command.user_id)?;
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let update = UserUpdate::new(user_id).with_role(command.role);
        let user = self.user_repo.update(update).await?;
        tracing::info!(
            user_id = i64::from(user.id),
            role = %user.role,
            granted_by = %actor.username,
            "role granted"
        );
        Ok(user.into())
    }
}
