//! Liveness endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Ping response
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub env: String,
}

/// GET /ping
async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        env: state.env.clone(),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::db::InMemoryQuoteRepo;

    #[tokio::test]
    async fn ping_reports_env() {
        let config = ServerConfig {
            env: "staging".into(),
            ..ServerConfig::default()
        };
        let state = Arc::new(AppState::new(Arc::new(InMemoryQuoteRepo::new()), &config));

        let Json(body) = ping(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.env, "staging");
    }
}
