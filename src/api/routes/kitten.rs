//! This module defines the HTTP routes for kitten operations.
//! It includes handlers for the breed/color discovery lists and for creating, listing,
//! retrieving, updating and deleting kittens.
//!
//! Paths are declared without a trailing slash; `NormalizePath::trim` makes the slashed
//! forms resolve to the same handlers. Update and delete are also served under the
//! nested `/kittens/kittens/{kitten_id}` path that existing clients call.

use crate::{
    api::controllers::kitten,
    models::{DefaultAppState, KittenCreateRequest, KittenListQuery, KittenUpdateRequest},
};
use actix_web::{delete, get, post, put, routes, web, Responder};

/// Lists the available breeds.
#[get("/kittens/breeds")]
async fn list_breeds() -> impl Responder {
    kitten::list_breeds().await
}

/// Lists the available colors.
#[get("/kittens/colors")]
async fn list_colors() -> impl Responder {
    kitten::list_colors().await
}

/// Creates a new kitten.
#[post("/kittens")]
async fn create_kitten(
    request: web::Json<KittenCreateRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    kitten::create_kitten(request.into_inner(), data).await
}

/// Lists kittens, optionally filtered by breed.
#[get("/kittens")]
async fn list_kittens(
    query: web::Query<KittenListQuery>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    kitten::list_kittens(query.into_inner(), data).await
}

/// Retrieves a kitten by ID.
#[get("/kittens/{kitten_id}")]
async fn get_kitten(
    kitten_id: web::Path<i64>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    kitten::get_kitten(kitten_id.into_inner(), data).await
}

/// Updates an existing kitten.
#[routes]
#[put("/kittens/{kitten_id}")]
#[put("/kittens/kittens/{kitten_id}")]
async fn update_kitten(
    kitten_id: web::Path<i64>,
    request: web::Json<KittenUpdateRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    kitten::update_kitten(kitten_id.into_inner(), request.into_inner(), data).await
}

/// Deletes a kitten by ID.
#[routes]
#[delete("/kittens/{kitten_id}")]
#[delete("/kittens/kittens/{kitten_id}")]
async fn delete_kitten(
    kitten_id: web::Path<i64>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    kitten::delete_kitten(kitten_id.into_inner(), data).await
}

/// Configures the kitten routes.
///
/// The discovery lists are registered before `/kittens/{kitten_id}` so they are not
/// captured by it.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_breeds)
        .service(list_colors)
        .service(create_kitten)
        .service(list_kittens)
        .service(get_kitten)
        .service(update_kitten)
        .service(delete_kitten);
}
