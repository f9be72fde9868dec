use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::completion::RawCompletion;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// Forward a free-form prompt and return the completion unparsed.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> impl IntoResponse {
    match state.ai.ask(&payload.prompt).await {
        Ok(RawCompletion::Text(text)) => {
            (StatusCode::OK, Json(json!({ "response": text }))).into_response()
        }
        Ok(RawCompletion::Structured(value)) => {
            (StatusCode::OK, Json(json!({ "response": value }))).into_response()
        }
        Err(e) => {
            tracing::error!("Completion call failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e })),
            )
                .into_response()
        }
    }
}
