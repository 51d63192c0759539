//! OpenAPI documentation for the HTTP endpoints.
//!
//! `kitten_docs` carries the `#[utoipa::path]` descriptions; [`init`] serves the assembled
//! document at `/api-docs/openapi.json`.
pub mod kitten_docs;

use actix_web::{get, web, HttpResponse};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
