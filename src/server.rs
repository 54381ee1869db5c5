use crate::card::ProfileCard;
use crate::models::DisplayState;
use crate::render::render_document;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub card: Arc<ProfileCard>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(card_page))
        .route("/api/state", get(display_state))
        .route("/livez", get(liveness_check))
        .route("/readyz", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Serve the card until `shutdown` resolves.
pub async fn start_card_server(
    app_state: AppState,
    bind: &str,
    port: u16,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(app_state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Profile card server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// The card as a full HTML page, in whatever state it is in right now
async fn card_page(State(state): State<AppState>) -> impl IntoResponse {
    let card = state.card.render();
    Html(render_document(state.card.config(), &card))
}

async fn display_state(State(state): State<AppState>) -> Json<DisplayState> {
    Json(state.card.state())
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}

/// Ready once the profile fetch has resolved, either way
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.card.state().is_settled();

    let response = ReadinessResponse {
        ready,
        message: if ready {
            None
        } else {
            Some("Profile still loading".to_string())
        },
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
