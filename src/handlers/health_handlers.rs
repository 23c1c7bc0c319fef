// src/handlers/health_handlers.rs

use actix_web::{get, HttpResponse, Responder};

#[derive(serde::Serialize)]
struct HealthOut {
    status: &'static str,
    version: &'static str,
}

/// Liveness probe for the deployment platform.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthOut {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
