// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::LlmConfig;
use crate::error::{AnalysisError, ErrorBody};
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/analyze", data = "<upload>")]
pub async fn analyze(
    upload: Form<AnalyzeUpload<'_>>,
    config: &State<LlmConfig>,
) -> Result<RawHtml<String>, AnalysisError> {
    handlers::analyze_handler(upload, config).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/")]
pub async fn index() -> Json<TextResponse> {
    handlers::index_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Invalid request format".to_string(),
        error_code: "BAD_REQUEST".to_string(),
        suggestions: vec![
            "Check your multipart form fields".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    })
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Resource not found".to_string(),
        error_code: "NOT_FOUND".to_string(),
        suggestions: vec!["POST the form to /api/analyze".to_string()],
    })
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Request form could not be parsed".to_string(),
        error_code: "UNPROCESSABLE".to_string(),
        suggestions: vec![
            "Send multipart/form-data with url and model_choice fields".to_string(),
        ],
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Internal server error".to_string(),
        error_code: "INTERNAL_ERROR".to_string(),
        suggestions: vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    })
}

// Main server start function
pub async fn start_web_server(config: LlmConfig, port: u16) -> Result<()> {
    info!("Starting Career Consultant API server on port {}", port);

    let figment = rocket::Config::figment().merge(("port", port)).merge((
        "limits",
        Limits::default()
            .limit("file", 10.mebibytes())
            .limit("data-form", 25.mebibytes()),
    ));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/", routes![index, options])
        .mount("/api", routes![analyze, health])
        .launch()
        .await?;

    Ok(())
}
