use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use shopeasy_agent::SupportAgent;
use shopeasy_core::{ShopEasyError, StateStore, ToolCallingLlm, UserState};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Everything a request handler needs, injected at construction so tests can
/// swap in scripted models and isolated stores.
#[derive(Clone)]
pub struct AppState {
    pub store: StateStore,
    pub llm: Arc<dyn ToolCallingLlm>,
    pub model: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .route("/debug/states", get(debug_states))
        .route("/debug/states/:user_id", delete(remove_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    user_id: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Per-user view returned by the diagnostic snapshot.
#[derive(Debug, Serialize)]
struct StateView {
    last_intent: Option<String>,
    last_order_id: Option<String>,
    message_count: u64,
}

impl From<UserState> for StateView {
    fn from(state: UserState) -> Self {
        Self {
            last_intent: state.last_intent,
            last_order_id: state.last_order_id,
            message_count: state.message_count,
        }
    }
}

async fn chat(
    State(app): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let state = app.store.get_or_create(&request.user_id);
    let agent = SupportAgent::new(app.llm.clone(), &app.model, state);
    let reply = agent.process(&request.message).await?;
    info!(user_id = %request.user_id, "chat turn completed");
    Ok(Json(ChatResponse { reply }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "ShopEasy support agent is running",
    })
}

async fn debug_states(State(app): State<AppState>) -> Json<BTreeMap<String, StateView>> {
    let snapshot = app
        .store
        .snapshot()
        .into_iter()
        .map(|(user_id, state)| (user_id, StateView::from(state)))
        .collect();
    Json(snapshot)
}

async fn remove_state(State(app): State<AppState>, Path(user_id): Path<String>) -> StatusCode {
    app.store.remove(&user_id);
    StatusCode::NO_CONTENT
}

/// Maps core failures onto HTTP statuses: configuration problems are the
/// caller's to fix (400), upstream model failures are relayed as 502 with
/// the raw message, everything else is a 500.
struct ApiError(ShopEasyError);

impl From<ShopEasyError> for ApiError {
    fn from(err: ShopEasyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ShopEasyError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            ShopEasyError::LlmProvider(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
