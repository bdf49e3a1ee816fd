// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{LoginDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginDto> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthenticated("invalid credentials"))?;

        let user = self.find_and_authenticate_user(&email, &command.password).await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        Ok(LoginDto {
            token: token.token,
            user_id: user.id.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthenticated("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
