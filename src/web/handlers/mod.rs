// src/web/handlers/mod.rs
pub mod analyze;

pub use analyze::analyze_handler;

use crate::web::types::TextResponse;
use rocket::serde::json::Json;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("Service is healthy".to_string()))
}

pub async fn index_handler() -> Json<TextResponse> {
    Json(TextResponse::success(
        "Welcome to the AI Career Consultant!".to_string(),
    ))
}
