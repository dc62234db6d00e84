mod login;
mod password;
mod register;
mod role;
mod service;

pub use login::{LoginCommand, LoginResult};
pub use register::RegisterUserCommand;
pub use role::GrantRoleCommand;
pub use service::UserCommandService;
