// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        validation,
    },
    domain::user::{DisplayName, Email, NewUser, PasswordHash},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        validation::ensure_valid(validation::validate_registration(
            &command.email,
            &command.password,
        ))?;

        let email = Email::new(command.email)?;
        let name = DisplayName::new(command.name)?;

        // Uniqueness is enforced here by look-before-insert; the store's own
        // unique index only backstops races.
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(email, name, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(UserDto::from_parts(user, Vec::new()))
    }
}
