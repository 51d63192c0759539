use crate::{
    api::routes::{docs::kitten_docs, health, metrics},
    models,
};
use utoipa::OpenApi;

/// # OpenAPI Specification
///
/// Describes the Kittens API endpoints and their schemas.
#[derive(OpenApi)]
#[openapi(
    tags(
      (name = "Kittens", description = "Kitten records: creation, listing, retrieval, partial updates and deletion, plus the breed and color lists they accept."),
      (name = "Metrics", description = "Prometheus metrics of the service."),
      (name = "Health", description = "Liveness of the service.")
    ),
    info(description = "Kittens API", version = "1.0.0", title = "Kittens API", license(
        name = "MIT"
    )),
    paths(
        kitten_docs::doc_list_breeds,
        kitten_docs::doc_list_colors,
        kitten_docs::doc_create_kitten,
        kitten_docs::doc_list_kittens,
        kitten_docs::doc_get_kitten,
        kitten_docs::doc_update_kitten,
        kitten_docs::doc_delete_kitten,
        health::health,
        metrics::scrape_metrics,
    ),
    components(schemas(
        models::KittenCreateRequest,
        models::KittenUpdateRequest,
        models::KittenResponse,
        models::KittenSummary,
        models::KittenMessageResponse,
        models::Breed,
        models::Color,
    ))
)]
pub struct ApiDoc;
