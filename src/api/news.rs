use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::extract::extract_json;
use crate::prompts;
use crate::state::AppState;

/// Latest global weather news digest with generative UI hints, recovered
/// into JSON from the model's reply.
pub async fn get_weather_news(State(state): State<AppState>) -> impl IntoResponse {
    let raw = match state.ai.ask(prompts::news_prompt()).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Completion call failed: {}", e);
            return news_error(e);
        }
    };

    match extract_json(raw) {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => news_error(e.detail()),
    }
}

fn news_error(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to parse weather news from AI response",
            "details": details,
        })),
    )
        .into_response()
}
