//! Prometheus text exposition of the service metrics.
use crate::metrics::gather_metrics;
use actix_web::{get, web, HttpResponse, Responder};

/// Returns every registered metric in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Metrics in Prometheus text format", body = String),
        (status = 500, description = "Metrics could not be encoded", body = String),
    )
)]
#[get("/metrics")]
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape_metrics);
}
