use axum::{extract::State, routing::any, Json, Router};
use tracing::instrument;

use super::dto::IpResponse;
use crate::state::AppState;

pub fn system_routes() -> Router<AppState> {
    Router::new().route("/ip", any(ip))
}

/// ANY /api/ip — echo the connectivity configuration fixed at process start.
#[instrument(skip(state))]
pub async fn ip(State(state): State<AppState>) -> Json<IpResponse> {
    let instance = &state.config.instance;
    Json(IpResponse {
        ip: instance.internal_ip.clone(),
        domain: instance.domain.clone(),
        port: instance.nginx_port.clone(),
    })
}
