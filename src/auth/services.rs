use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::info;

use crate::auth::dto::PublicUser;
use crate::auth::error::{AuthError, AuthResult};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;

/// Canonical comparison key for usernames: surrounding whitespace removed,
/// lower-cased. Applied at write time and to every lookup key.
pub(crate) fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub async fn login(db: &PgPool, username: &str, password: &str) -> AuthResult<PublicUser> {
    let username = normalize_username(username);

    let user = User::find_by_username(db, &username)
        .await?
        .ok_or(AuthError::NotFound)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = user.id, "user logged in");
    Ok(PublicUser::from(user))
}

pub async fn register(db: &PgPool, username: &str, password: &str) -> AuthResult<PublicUser> {
    let email = normalize_username(username);

    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    // Length is checked against the raw username, not the normalized email.
    if username.len() < 3 || !is_valid_email(&email) {
        return Err(AuthError::InvalidUsername);
    }

    if User::find_by_username(db, &email).await?.is_some() {
        return Err(AuthError::AlreadyExists);
    }

    let hash = hash_password(password)?;
    let user = User::create(db, &email, &hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(PublicUser::from(user))
}

/// Returns `None` for an absent or zero id and for ids with no matching row;
/// neither case is an error.
pub async fn me(db: &PgPool, user_id: Option<i64>) -> AuthResult<Option<PublicUser>> {
    let id = match user_id {
        None | Some(0) => return Ok(None),
        Some(id) => id,
    };

    Ok(User::find_by_id(db, id).await?.map(PublicUser::from))
}


// These paths fail before any query runs, so a lazy never-connecting pool is
// enough to drive them.
#[cfg(test)]
mod service_tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn register_rejects_empty_username() {
        let state = AppState::fake();
        let err = register(&state.db, "", "secret123").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn register_rejects_empty_password() {
        let state = AppState::fake();
        let err = register(&state.db, "alice@example.com", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn register_rejects_short_username_regardless_of_email_validity() {
        let state = AppState::fake();
        let err = register(&state.db, "ab", "whatever").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidUsername));
    }

    #[tokio::test]
    async fn register_rejects_non_email_username() {
        let state = AppState::fake();
        let err = register(&state.db, "not-an-email", "whatever")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidUsername));
    }

    #[tokio::test]
    async fn me_returns_none_for_absent_id() {
        let state = AppState::fake();
        let user = me(&state.db, None).await.expect("no query should run");
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn me_returns_none_for_zero_id() {
        let state = AppState::fake();
        let user = me(&state.db, Some(0)).await.expect("no query should run");
        assert!(user.is_none());
    }
}
