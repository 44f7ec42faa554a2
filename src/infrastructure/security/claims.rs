// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

    Ok(AuthenticatedUser {
        id,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => {
                if let Some(Term::Integer(id)) = predicate.terms.first() {
                    self.user_id = Some(*id);
                }
            }
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            _ => {}
        }
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
