use actix_web::{HttpResponse, Result};
use chrono::Utc;
use intake_types::{HealthResponse, VersionResponse};

pub async fn health_check() -> Result<HttpResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    Ok(HttpResponse::Ok().json(response))
}

pub async fn version_info() -> Result<HttpResponse> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "intake-api".to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}
