//! Routes for the conversation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use pathways_conversation::application::command_handlers;
use pathways_conversation::application::query_handlers::{self, ConversationView};
use pathways_conversation::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /{session_id}/input.
#[derive(Debug, Deserialize)]
pub struct SubmitInputRequest {
    /// The user's message.
    pub text: String,
}

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    /// The new session's identifier.
    pub session_id: Uuid,
}

/// POST /
#[instrument(skip(state))]
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.registry.create(state.clock.as_ref()).await;
    info!(%session_id, "created conversation session");
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// POST /{session_id}/input
#[instrument(skip(state, request), fields(session_id = %session_id))]
async fn submit_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitInputRequest>,
) -> Result<StatusCode, ApiError> {
    let command = commands::SubmitInput {
        correlation_id: Uuid::new_v4(),
        session_id,
        text: request.text,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_input command");

    command_handlers::handle_submit_input(&command, &state.registry, state.clock.as_ref()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /{session_id}
#[instrument(skip(state), fields(session_id = %session_id))]
async fn render(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ConversationView>, ApiError> {
    let command = commands::RenderConversation {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    info!(correlation_id = %command.correlation_id, "handling render command");

    let view = command_handlers::handle_render(
        &command,
        &state.registry,
        &state.dispatcher,
        state.clock.as_ref(),
    )
    .await?;

    Ok(Json(view))
}

/// GET /{session_id}/log
async fn get_log(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Json<ConversationView> {
    Json(query_handlers::get_conversation(session_id, &state.registry).await)
}

/// POST /{session_id}/reset
#[instrument(skip(state), fields(session_id = %session_id))]
async fn reset(State(state): State<AppState>, Path(session_id): Path<Uuid>) -> StatusCode {
    let command = commands::ResetSession {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    command_handlers::handle_reset(&command, &state.registry, state.clock.as_ref()).await;

    StatusCode::NO_CONTENT
}

/// Returns the router for conversation sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{session_id}", get(render))
        .route("/{session_id}/input", post(submit_input))
        .route("/{session_id}/log", get(get_log))
        .route("/{session_id}/reset", post(reset))
}
