pub mod event;
pub mod user;

use axum::{Json, Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .nest("/users", user::router())
        .nest("/events", event::router())
}

async fn hello() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World" }))
}
