// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Register a new account. The very first account becomes the
    /// administrator; everyone after that starts as a regular author.
    pub async fn register_user(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        let hash = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hash)?;

        let role = if self.user_repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::Author
        };

        let new_user = NewUser::new(username, password_hash, role, self.clock.now())?;
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(user.id), role = %user.role, "user registered");
        Ok(user.into())
    }
}
