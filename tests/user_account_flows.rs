// tests/user_account_flows.rs
mod support;

use std::sync::Arc;

use pandora_core::application::commands::users::{
    GrantRoleCommand, LoginCommand, RegisterUserCommand, UserCommandService,
};
use pandora_core::application::error::ApplicationError;
use pandora_core::domain::errors::DomainError;
use pandora_core::domain::user::{Role, UserId, UserRepository, UserUpdate};

use support::{DummyClock, DummyPasswordHasher, DummyTokenManager, InMemoryUsers, actor};

fn service(users: Arc<InMemoryUsers>) -> UserCommandService {
    UserCommandService::new(
        users,
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(DummyClock),
    )
}

fn register(username: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        password: "correct horse".into(),
    }
}

#[tokio::test]
async fn first_account_becomes_admin() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);

    let alice = service.register_user(register("alice")).await.expect("register");
    assert_eq!(alice.role, Role::Admin);
    assert!(alice.is_active);

    let bob = service.register_user(register("bob")).await.expect("register");
    assert_eq!(bob.role, Role::Author);
}

#[tokio::test]
async fn short_passwords_are_rejected() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);

    let err = service
        .register_user(RegisterUserCommand {
            username: "alice".into(),
            password: "seven77".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);

    service.register_user(register("alice")).await.unwrap();
    let err = service.register_user(register("alice")).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn login_issues_a_token_for_valid_credentials() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);
    service.register_user(register("alice")).await.unwrap();

    let result = service
        .login(LoginCommand {
            username: "alice".into(),
            password: "correct horse".into(),
        })
        .await
        .expect("login");
    assert_eq!(result.token.token, "token-alice");
    assert_eq!(result.user.username, "alice");
    assert_eq!(result.user.role, Role::Admin);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);
    service.register_user(register("alice")).await.unwrap();

    let err = service
        .login(LoginCommand {
            username: "alice".into(),
            password: "battery staple".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn unknown_username_is_unauthorized() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);

    let err = service
        .login(LoginCommand {
            username: "nobody".into(),
            password: "correct horse".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn deactivated_accounts_cannot_login() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users.clone());
    let alice = service.register_user(register("alice")).await.unwrap();

    users
        .update(UserUpdate::new(UserId::new(alice.id).unwrap()).with_is_active(false))
        .await
        .unwrap();

    let err = service
        .login(LoginCommand {
            username: "alice".into(),
            password: "correct horse".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn admins_grant_roles() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);
    service.register_user(register("alice")).await.unwrap();
    let bob = service.register_user(register("bob")).await.unwrap();

    let admin = actor(1, Role::Admin);
    let promoted = service
        .grant_role(
            &admin,
            GrantRoleCommand {
                user_id: bob.id,
                role: Role::Moderator,
            },
        )
        .await
        .expect("grant role");
    assert_eq!(promoted.role, Role::Moderator);
}

#[tokio::test]
async fn granting_roles_requires_user_management_rights() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);
    service.register_user(register("alice")).await.unwrap();
    let bob = service.register_user(register("bob")).await.unwrap();

    let author = actor(2, Role::Author);
    let err = service
        .grant_role(
            &author,
            GrantRoleCommand {
                user_id: bob.id,
                role: Role::Moderator,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn granting_to_an_unknown_user_is_not_found() {
    let users = Arc::new(InMemoryUsers::default());
    let service = service(users);

    let admin = actor(1, Role::Admin);
    let err = service
        .grant_role(
            &admin,
            GrantRoleCommand {
                user_id: 42,
                role: Role::Moderator,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
