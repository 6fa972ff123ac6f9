use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct SnapshotInfo {
    loaded_at: String,
    projects: usize,
    categories: usize,
    experiences: usize,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    snapshot: SnapshotInfo,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;
    let snapshot = state.snapshot();

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        snapshot: SnapshotInfo {
            loaded_at: snapshot.loaded_at.to_rfc3339(),
            projects: snapshot.catalog.len(),
            categories: snapshot.catalog.all_categories().len(),
            experiences: snapshot.experiences.len(),
        },
    })
}
