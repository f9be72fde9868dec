use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::extract::extract_json;
use crate::prompts;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WeatherRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Current conditions plus a 3-day forecast for the given coordinates,
/// generated by the model and recovered into JSON. The extracted value is
/// forwarded as-is; field-level schema conformance is the client's concern.
pub async fn get_weather(
    State(state): State<AppState>,
    Json(payload): Json<WeatherRequest>,
) -> impl IntoResponse {
    let prompt = prompts::weather_prompt(payload.latitude, payload.longitude);

    let raw = match state.ai.ask(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Completion call failed: {}", e);
            return weather_error(e);
        }
    };

    match extract_json(raw) {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => weather_error(e.detail()),
    }
}

fn weather_error(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to parse weather data from AI response",
            "details": details,
        })),
    )
        .into_response()
}
