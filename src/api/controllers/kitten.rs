//! # Kittens Controller
//!
//! Handles HTTP endpoints for kitten operations including:
//! - Listing the available breeds and colors
//! - Creating kittens
//! - Listing kittens, optionally by breed
//! - Getting, updating and deleting a kitten

use crate::{
    constants::{KITTEN_CREATED_MESSAGE, KITTEN_DELETED_MESSAGE, KITTEN_UPDATED_MESSAGE},
    models::{
        ApiError, Breed, Color, KittenCreateRequest, KittenListQuery, KittenMessageResponse,
        KittenResponse, KittenUpdateRequest, ThinDataAppState,
    },
    repositories::KittenRepository,
    services::KittenService,
};

use actix_web::HttpResponse;

fn kitten_service<KR>(state: &ThinDataAppState<KR>) -> KittenService<KR>
where
    KR: KittenRepository + 'static,
{
    KittenService::new(state.kitten_repository())
}

/// Lists every breed display name in declaration order.
pub async fn list_breeds() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(Breed::values()))
}

/// Lists every color display name in declaration order.
pub async fn list_colors() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(Color::values()))
}

/// Creates a new kitten.
///
/// # Returns
///
/// `201 Created` with the confirmation message and the stored kitten.
pub async fn create_kitten<KR>(
    request: KittenCreateRequest,
    state: ThinDataAppState<KR>,
) -> Result<HttpResponse, ApiError>
where
    KR: KittenRepository + 'static,
{
    let kitten = kitten_service(&state).create(request).await?;

    Ok(HttpResponse::Created().json(KittenMessageResponse::new(
        KITTEN_CREATED_MESSAGE,
        KittenResponse::from(kitten),
    )))
}

/// Lists kitten summaries, optionally filtered by breed.
///
/// # Returns
///
/// `200 OK` with the summaries, or `204 No Content` when nothing matches.
pub async fn list_kittens<KR>(
    query: KittenListQuery,
    state: ThinDataAppState<KR>,
) -> Result<HttpResponse, ApiError>
where
    KR: KittenRepository + 'static,
{
    let breed = query.breed_filter()?;
    let kittens = kitten_service(&state).list(breed).await?;

    if kittens.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }
    Ok(HttpResponse::Ok().json(kittens))
}

pub async fn get_kitten<KR>(
    kitten_id: i64,
    state: ThinDataAppState<KR>,
) -> Result<HttpResponse, ApiError>
where
    KR: KittenRepository + 'static,
{
    let kitten = kitten_service(&state).get(kitten_id).await?;
    Ok(HttpResponse::Ok().json(KittenResponse::from(kitten)))
}

/// Updates the supplied fields of an existing kitten.
pub async fn update_kitten<KR>(
    kitten_id: i64,
    request: KittenUpdateRequest,
    state: ThinDataAppState<KR>,
) -> Result<HttpResponse, ApiError>
where
    KR: KittenRepository + 'static,
{
    let kitten = kitten_service(&state).update(kitten_id, request).await?;

    Ok(HttpResponse::Ok().json(KittenMessageResponse::new(
        KITTEN_UPDATED_MESSAGE,
        KittenResponse::from(kitten),
    )))
}

pub async fn delete_kitten<KR>(
    kitten_id: i64,
    state: ThinDataAppState<KR>,
) -> Result<HttpResponse, ApiError>
where
    KR: KittenRepository + 'static,
{
    kitten_service(&state).delete(kitten_id).await?;
    Ok(HttpResponse::Ok().json(KITTEN_DELETED_MESSAGE))
}
