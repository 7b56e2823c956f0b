use crate::state::AppState;
use axum::Router;

mod dto;
pub mod error;
pub mod handlers;
mod jwt;
mod password;
mod repo;
mod repo_types;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
