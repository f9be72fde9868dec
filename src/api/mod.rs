pub mod ask;
pub mod health;
pub mod news;
pub mod weather;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask::ask))
        .route("/weather", post(weather::get_weather))
        .route("/weather-news", get(news::get_weather_news))
        .route("/health", get(health::health_check))
        .with_state(state)
}
