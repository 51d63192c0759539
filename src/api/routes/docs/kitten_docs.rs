//! OpenAPI path definitions for the kitten endpoints, collected by `openapi.rs`.

use crate::models::{
    ApiResponse, KittenCreateRequest, KittenMessageResponse, KittenResponse, KittenSummary,
    KittenUpdateRequest,
};

/// Lists the breed display names accepted by the kitten endpoints.
#[utoipa::path(
    get,
    path = "/kittens/breeds/",
    tag = "Kittens",
    operation_id = "listBreeds",
    responses(
        (
            status = 200,
            description = "Breeds in declaration order",
            body = Vec<String>,
            example = json!(["Abyssinian", "Bengal", "British Shorthair"])
        )
    )
)]
#[allow(dead_code)]
fn doc_list_breeds() {}

/// Lists the color display names accepted by the kitten endpoints.
#[utoipa::path(
    get,
    path = "/kittens/colors/",
    tag = "Kittens",
    operation_id = "listColors",
    responses(
        (
            status = 200,
            description = "Colors in declaration order",
            body = Vec<String>,
            example = json!(["Black", "White", "Gray"])
        )
    )
)]
#[allow(dead_code)]
fn doc_list_colors() {}

/// Creates a new kitten.
#[utoipa::path(
    post,
    path = "/kittens/",
    tag = "Kittens",
    operation_id = "createKitten",
    request_body = KittenCreateRequest,
    responses(
        (
            status = 201,
            description = "Kitten created successfully",
            body = KittenMessageResponse
        ),
        (
            status = 400,
            description = "A field breaks a character-set or membership rule",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid breed provided"
            })
        ),
        (
            status = 409,
            description = "Name already taken",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "A kitten with this name already exists"
            })
        ),
        (
            status = 422,
            description = "A field is empty or out of range",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Age must be a positive number and no more than 6"
            })
        ),
        (
            status = 500,
            description = "Internal Server Error",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "An unknown error occurred"
            })
        )
    )
)]
#[allow(dead_code)]
fn doc_create_kitten() {}

/// Lists kitten summaries ordered by id.
#[utoipa::path(
    get,
    path = "/kittens/",
    tag = "Kittens",
    operation_id = "listKittens",
    params(
        ("breed" = Option<String>, Query, description = "Only list kittens of this breed")
    ),
    responses(
        (
            status = 200,
            description = "Kitten summaries",
            body = Vec<KittenSummary>
        ),
        (
            status = 204,
            description = "No kitten matches"
        ),
        (
            status = 400,
            description = "Unknown breed",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid breed provided"
            })
        ),
        (
            status = 500,
            description = "Internal Server Error",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "An unknown error occurred"
            })
        )
    )
)]
#[allow(dead_code)]
fn doc_list_kittens() {}

/// Retrieves a kitten by id.
#[utoipa::path(
    get,
    path = "/kittens/{kitten_id}/",
    tag = "Kittens",
    operation_id = "getKitten",
    params(
        ("kitten_id" = i64, Path, description = "Kitten ID")
    ),
    responses(
        (
            status = 200,
            description = "Kitten retrieved successfully",
            body = KittenResponse
        ),
        (
            status = 404,
            description = "Kitten not found",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "The kitten was not found"
            })
        ),
        (
            status = 500,
            description = "Internal Server Error",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "An unknown error occurred"
            })
        )
    )
)]
#[allow(dead_code)]
fn doc_get_kitten() {}

/// Updates the supplied fields of a kitten.
#[utoipa::path(
    put,
    path = "/kittens/{kitten_id}/",
    tag = "Kittens",
    operation_id = "updateKitten",
    params(
        ("kitten_id" = i64, Path, description = "Kitten ID")
    ),
    request_body = KittenUpdateRequest,
    responses(
        (
            status = 200,
            description = "Kitten updated successfully",
            body = KittenMessageResponse
        ),
        (
            status = 400,
            description = "A field breaks a character-set or membership rule",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid color provided"
            })
        ),
        (
            status = 404,
            description = "Kitten not found",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "The kitten was not found"
            })
        ),
        (
            status = 409,
            description = "Name already taken by another kitten",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "A kitten with this name already exists"
            })
        ),
        (
            status = 422,
            description = "A field is empty or out of range",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Age must be a positive number and no more than 6"
            })
        ),
        (
            status = 500,
            description = "Internal Server Error",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "An unknown error occurred"
            })
        )
    )
)]
#[allow(dead_code)]
fn doc_update_kitten() {}

/// Deletes a kitten by id.
#[utoipa::path(
    delete,
    path = "/kittens/{kitten_id}/",
    tag = "Kittens",
    operation_id = "deleteKitten",
    params(
        ("kitten_id" = i64, Path, description = "Kitten ID")
    ),
    responses(
        (
            status = 200,
            description = "Kitten deleted successfully",
            body = String,
            example = json!("The kitten has been deleted")
        ),
        (
            status = 404,
            description = "Kitten not found",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "The kitten was not found"
            })
        ),
        (
            status = 500,
            description = "Internal Server Error",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "An unknown error occurred"
            })
        )
    )
)]
#[allow(dead_code)]
fn doc_delete_kitten() {}
