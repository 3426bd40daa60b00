//! HTTP server exposing the pipeline to the browser editor.
//!
//! Thin routing over [`Pipeline`]: form-encoded requests in, JSON out,
//! plus the embedded page, its stylesheet, and the download echo. All
//! state is the pipeline behind an `Arc` -- nothing mutable is shared
//! between requests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use drafter_core::{Pipeline, PipelineError};

use crate::assets;

/// Filename offered to the browser by the download endpoint.
const DOWNLOAD_FILENAME: &str = "diagram.drawio";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let status = match &err {
            PipelineError::MissingInput { .. } => StatusCode::BAD_REQUEST,
            PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
            PipelineError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PlanForm {
    #[serde(default)]
    instruction: String,
}

#[derive(Debug, Deserialize)]
struct XmlForm {
    #[serde(default)]
    plan: String,
}

#[derive(Debug, Deserialize)]
struct DownloadForm {
    #[serde(default)]
    xml: String,
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    plan: String,
}

#[derive(Debug, Serialize)]
struct XmlResponse {
    xml: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/css/main.css", get(main_css))
        .route("/api/plan", post(api_plan))
        .route("/api/xml", post(api_xml))
        .route("/download", post(download))
        .layer(CorsLayer::permissive())
        .with_state(pipeline)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(pipeline: Arc<Pipeline>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(pipeline);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("drafter serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("drafter serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn main_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::MAIN_CSS)
}

async fn api_plan(
    State(pipeline): State<Arc<Pipeline>>,
    Form(form): Form<PlanForm>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = pipeline.plan_stage(&form.instruction).await?;
    Ok(Json(PlanResponse { plan }))
}

async fn api_xml(
    State(pipeline): State<Arc<Pipeline>>,
    Form(form): Form<XmlForm>,
) -> Result<Json<XmlResponse>, AppError> {
    let xml = pipeline.diagram_stage(&form.plan).await?;
    Ok(Json(XmlResponse { xml }))
}

async fn download(Form(form): Form<DownloadForm>) -> Result<axum::response::Response, AppError> {
    if form.xml.trim().is_empty() {
        return Err(AppError::bad_request("missing xml"));
    }

    let headers = [
        (header::CONTENT_TYPE, "application/xml".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        ),
    ];
    Ok((headers, form.xml).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
