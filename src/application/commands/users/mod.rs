mod login;
mod register;
mod service;
mod status;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use status::UpdateStatusCommand;
