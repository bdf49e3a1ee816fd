// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn parse_claims(
    facts: Vec<biscuit_auth::builder::Fact>,
) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(&ctx)
}

fn build_authenticated_user(ctx: &ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthenticated("missing user id"))?;
    let email = ctx
        .email
        .clone()
        .ok_or_else(|| ApplicationError::unauthenticated("missing email"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthenticated("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthenticated("missing expires_at"))?;

    Ok(AuthenticatedUser {
        id: UserId::new(user_id)?,
        email,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<biscuit_auth::builder::Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: biscuit_auth::builder::Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "issued_at" => self.handle_issued_at(&predicate),
            "expires_at" => self.handle_expires_at(&predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if predicate.terms.len() == 2 {
            if let biscuit_auth::builder::Term::Integer(id) = predicate.terms[0] {
                self.user_id = Some(id);
            }
            if let biscuit_auth::builder::Term::Str(email) = predicate.terms[1].clone() {
                self.email = Some(email);
            }
        }
    }

    fn handle_issued_at(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(biscuit_auth::builder::Term::Date(seconds)) = predicate.terms.first() {
            self.issued_at = Some(UNIX_EPOCH + std::time::Duration::from_secs(*seconds));
        }
    }

    fn handle_expires_at(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(biscuit_auth::builder::Term::Date(seconds)) = predicate.terms.first() {
            self.expires_at = Some(UNIX_EPOCH + std::time::Duration::from_secs(*seconds));
        }
    }
}
