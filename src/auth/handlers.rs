use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        error::AuthError,
        jwt::{CurrentUser, JwtKeys},
        services,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let user = services::register(&state.db, &payload.username, &payload.password).await?;
    let token = JwtKeys::from_ref(&state).sign(user.id)?;
    Ok(Json(AuthResponse { token, user }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let user = services::login(&state.db, &payload.username, &payload.password).await?;
    let token = JwtKeys::from_ref(&state).sign(user.id)?;
    Ok(Json(AuthResponse { token, user }))
}

/// Mirrors the service contract: no established identity is a `null` body,
/// not an error.
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Option<PublicUser>>, AuthError> {
    let user = services::me(&state.db, user_id).await?;
    Ok(Json(user))
}
