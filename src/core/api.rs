//! HTTP API for Trikona
//!
//! Endpoints (all GET, all stateless):
//! - /health - Health check
//! - /numerology/triangle - DOB triangle
//! - /numerology/person-report - triangle + reads + polarity + signals
//! - /numerology/year-only - year driver triangle
//! - /numerology/yearly - yearly cycle report
//! - /numerology/monthly - monthly cycle report
//! - /numerology/daily - daily cycle report
//! - /numerology/reads - read codes for a DOB
//! - /numerology/polarity - polarity summary for a DOB
//! - /numerology/signals - raw scanner output for a feature

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::core::date::InvalidDateFormat;
use crate::core::drivers::year_only_triangle;
use crate::core::polarity::summarize_polarity;
use crate::core::reads::build_reads;
use crate::core::report::{daily_report, monthly_report, person_report, yearly_report};
use crate::core::scanner::scan_special_signals;
use crate::core::triangle::triangle_from_dob;
use crate::types::{PolaritySummary, Reads, SignalBundle, Triangle};

/// JSON error body for rejected requests
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl From<InvalidDateFormat> for ApiError {
    fn from(err: InvalidDateFormat) -> Self {
        Self { error: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct DobQuery {
    pub dob: String,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: u32,
}

#[derive(Debug, Deserialize)]
pub struct CycleQuery {
    pub dob: String,
    pub year: u32,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub dob: String,
    pub day: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignalsQuery {
    pub dob: String,
    pub feature: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/numerology/triangle", get(triangle_json))
        .route("/numerology/person-report", get(person_report_json))
        .route("/numerology/year-only", get(year_only_json))
        .route("/numerology/yearly", get(yearly_json))
        .route("/numerology/monthly", get(monthly_json))
        .route("/numerology/daily", get(daily_json))
        .route("/numerology/reads", get(reads_json))
        .route("/numerology/polarity", get(polarity_json))
        .route("/numerology/signals", get(signals_json))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn triangle_json(Query(q): Query<DobQuery>) -> Result<Json<Triangle>, ApiError> {
    Ok(Json(triangle_from_dob(&q.dob)?))
}

async fn person_report_json(
    Query(q): Query<DobQuery>,
) -> Result<Json<crate::core::report::PersonReport>, ApiError> {
    Ok(Json(person_report(&q.dob)?))
}

async fn year_only_json(Query(q): Query<YearQuery>) -> Json<Triangle> {
    Json(year_only_triangle(q.year))
}

async fn yearly_json(
    Query(q): Query<CycleQuery>,
) -> Result<Json<crate::core::report::CycleReport>, ApiError> {
    Ok(Json(yearly_report(&q.dob, q.year)?))
}

async fn monthly_json(
    Query(q): Query<CycleQuery>,
) -> Result<Json<crate::core::report::CycleReport>, ApiError> {
    Ok(Json(monthly_report(&q.dob, q.year, q.month)?))
}

async fn daily_json(
    Query(q): Query<DayQuery>,
) -> Result<Json<crate::core::report::CycleReport>, ApiError> {
    Ok(Json(daily_report(&q.dob, q.day.as_deref())?))
}

async fn reads_json(Query(q): Query<DobQuery>) -> Result<Json<Reads>, ApiError> {
    let t = triangle_from_dob(&q.dob)?;
    Ok(Json(build_reads(&t)))
}

async fn polarity_json(Query(q): Query<DobQuery>) -> Result<Json<PolaritySummary>, ApiError> {
    let t = triangle_from_dob(&q.dob)?;
    Ok(Json(summarize_polarity(&t)))
}

/// Raw scanner output; `null` when nothing matched (including unknown
/// feature strings)
async fn signals_json(
    Query(q): Query<SignalsQuery>,
) -> Result<Json<Option<SignalBundle>>, ApiError> {
    let t = triangle_from_dob(&q.dob)?;
    Ok(Json(scan_special_signals(&q.feature, &t, None)))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Trikona API running on {}", addr);
    println!("  GET /health                    - Health check");
    println!("  GET /numerology/triangle       - DOB triangle");
    println!("  GET /numerology/person-report  - Full single-person report");
    println!("  GET /numerology/year-only      - Year driver triangle");
    println!("  GET /numerology/yearly         - Yearly cycle report");
    println!("  GET /numerology/monthly        - Monthly cycle report");
    println!("  GET /numerology/daily          - Daily cycle report");
    println!("  GET /numerology/reads          - Read codes");
    println!("  GET /numerology/polarity       - Polarity summary");
    println!("  GET /numerology/signals        - Raw scanner output");
    axum::serve(listener, router).await?;
    Ok(())
}
