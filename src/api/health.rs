use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let timestamp = chrono::Utc::now().timestamp();

    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            service: "resume-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: "connected".to_string(),
            timestamp,
        }),
        Err(e) => {
            log::error!("❌ Health check: MongoDB unreachable: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded".to_string(),
                service: "resume-service".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                database: "unreachable".to_string(),
                timestamp,
            })
        }
    }
}
