//! End-to-end HTTP scenarios against the full route and middleware stack, running on the
//! in-memory repository.
use actix_web::{
    http::StatusCode,
    middleware::{self, NormalizePath},
    test, App,
};
use serde_json::{json, Value};

use kittens_api::{
    api::routes::configure_routes,
    config::{RepositoryStorageType, ServerConfig},
    init::initialize_app_state,
    metrics::middleware::MetricsMiddleware,
};

fn in_memory_config() -> ServerConfig {
    ServerConfig {
        host: "localhost".to_string(),
        port: 8080,
        repository_storage_type: RepositoryStorageType::InMemory,
        database: None,
        db_max_connections: 5,
        enable_swagger: false,
        secret_key: None,
    }
}

/// Builds the service with the same middleware and routes as the server binary.
macro_rules! init_app {
    () => {{
        let app_state = initialize_app_state(&in_memory_config())
            .await
            .expect("Failed to initialize app state");

        test::init_service(
            App::new()
                .wrap(MetricsMiddleware)
                .wrap(NormalizePath::trim())
                .wrap(middleware::DefaultHeaders::new())
                .app_data(app_state)
                .configure(configure_routes),
        )
        .await
    }};
}

fn whiskers() -> Value {
    json!({
        "name": "Whiskers",
        "description": "Curious",
        "breed": "Bengal",
        "age": 2,
        "color": "Orange"
    })
}

#[actix_web::test]
async fn test_kitten_lifecycle() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/kittens/")
        .set_json(whiskers())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["message"], "The kitten is created");
    assert_eq!(created["kitten"]["name"], "Whiskers");
    let id = created["kitten"]["id"].as_i64().expect("id is an integer");

    let req = test::TestRequest::put()
        .uri(&format!("/kittens/{}/", id))
        .set_json(json!({ "age": 99 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(
        error,
        json!({
            "success": false,
            "data": null,
            "error": "Age must be a positive number and no more than 6"
        })
    );

    let req = test::TestRequest::get()
        .uri(&format!("/kittens/{}/", id))
        .to_request();
    let kitten: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(kitten["age"], 2);
    assert_eq!(kitten["breed"], "Bengal");
    assert_eq!(kitten["color"], "Orange");
    assert_eq!(kitten["description"], "Curious");

    let req = test::TestRequest::delete()
        .uri(&format!("/kittens/{}/", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let message: Value = test::read_body_json(resp).await;
    assert_eq!(message, "The kitten has been deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/kittens/{}/", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "The kitten was not found");
}

#[actix_web::test]
async fn test_create_applies_defaults_and_title_case() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/kittens")
        .set_json(json!({ "name": "mister whiskers", "age": "3" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["kitten"]["name"], "Mister Whiskers");
    assert_eq!(created["kitten"]["description"], "Silly Kitten");
    assert_eq!(created["kitten"]["breed"], "Bengal");
    assert_eq!(created["kitten"]["color"], "White");
    assert_eq!(created["kitten"]["age"], 3);
}

#[actix_web::test]
async fn test_create_validation_statuses() {
    let app = init_app!();

    let cases = [
        (json!({ "name": "", "age": 2 }), StatusCode::UNPROCESSABLE_ENTITY, "Username cannot be empty"),
        (json!({ "name": "Tom", "age": 2 }), StatusCode::UNPROCESSABLE_ENTITY, "Name must be between 4 and 20 characters long"),
        (json!({ "name": "R2D2 Unit", "age": 2 }), StatusCode::BAD_REQUEST, "Kitten name must contain only Latin or Cyrillic letters"),
        (json!({ "name": "Whiskers", "description": "", "age": 2 }), StatusCode::UNPROCESSABLE_ENTITY, "Description cannot be empty"),
        (json!({ "name": "Whiskers", "description": "Loves <script>", "age": 2 }), StatusCode::BAD_REQUEST, "Description must contain only Latin or Cyrillic letters, numbers, and punctuation marks"),
        (json!({ "name": "Whiskers", "breed": "", "age": 2 }), StatusCode::UNPROCESSABLE_ENTITY, "Breed cannot be empty"),
        (json!({ "name": "Whiskers", "breed": "Tiger", "age": 2 }), StatusCode::BAD_REQUEST, "Invalid breed provided"),
        (json!({ "name": "Whiskers" }), StatusCode::UNPROCESSABLE_ENTITY, "Age cannot be empty"),
        (json!({ "name": "Whiskers", "age": "two" }), StatusCode::BAD_REQUEST, "Age must be a valid integer"),
        (json!({ "name": "Whiskers", "age": 7 }), StatusCode::UNPROCESSABLE_ENTITY, "Age must be a positive number and no more than 6"),
        (json!({ "name": "Whiskers", "age": 10000000000000000000u64 }), StatusCode::UNPROCESSABLE_ENTITY, "Age must be a positive number and no more than 6"),
        (json!({ "name": "Whiskers", "age": "99999999999999999999" }), StatusCode::UNPROCESSABLE_ENTITY, "Age must be a positive number and no more than 6"),
        (json!({ "name": "Whiskers", "age": 2, "color": "" }), StatusCode::UNPROCESSABLE_ENTITY, "Color cannot be empty"),
        (json!({ "name": "Whiskers", "age": 2, "color": "Purple" }), StatusCode::BAD_REQUEST, "Invalid color provided"),
    ];

    for (body, status, message) in cases {
        let req = test::TestRequest::post()
            .uri("/kittens")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "unexpected status for {}", body);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], message, "unexpected message for {}", body);
    }

    // Nothing was stored.
    let req = test::TestRequest::get().uri("/kittens").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_duplicate_name_conflicts() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/kittens")
        .set_json(whiskers())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/kittens")
        .set_json(json!({ "name": "whiskers", "age": 4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "A kitten with this name already exists");
}

#[actix_web::test]
async fn test_list_and_breed_filter() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/kittens/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    for body in [
        whiskers(),
        json!({ "name": "Snowball", "breed": "Persian", "age": 1 }),
        json!({ "name": "Барсик", "breed": "Maine Coon", "age": 5 }),
    ] {
        let req = test::TestRequest::post()
            .uri("/kittens")
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/kittens").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        all,
        json!([
            { "id": 1, "name": "Whiskers", "description": "Curious" },
            { "id": 2, "name": "Snowball", "description": "Silly Kitten" },
            { "id": 3, "name": "Барсик", "description": "Silly Kitten" }
        ])
    );

    let req = test::TestRequest::get()
        .uri("/kittens?breed=Maine%20Coon")
        .to_request();
    let maine_coons: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        maine_coons,
        json!([{ "id": 3, "name": "Барсик", "description": "Silly Kitten" }])
    );

    let req = test::TestRequest::get()
        .uri("/kittens?breed=Sphynx")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/kittens?breed=Tiger")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_discovery_endpoints() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/kittens/breeds/").to_request();
    let breeds: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        breeds,
        vec![
            "Abyssinian",
            "Bengal",
            "British Shorthair",
            "Maine Coon",
            "Persian",
            "Ragdoll",
            "Siamese",
            "Sphynx",
            "Scottish Fold",
            "Burmese",
            "Oriental Shorthair",
            "Normandy",
            "American Shorthair",
            "Somali",
            "Devon Rex",
        ]
    );

    let req = test::TestRequest::get().uri("/kittens/colors/").to_request();
    let colors: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        colors,
        vec![
            "Black", "White", "Gray", "Orange", "Calico", "Tabby", "Brown", "Cream", "Blue",
            "Red", "Chocolate", "Lilac", "Tortie",
        ]
    );
}

#[actix_web::test]
async fn test_update_and_delete_missing_kitten() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/kittens/42/")
        .set_json(json!({ "age": 3 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/kittens/42/").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_name_is_normalized_and_unique() {
    let app = init_app!();

    for body in [whiskers(), json!({ "name": "Snowball", "age": 1 })] {
        let req = test::TestRequest::post()
            .uri("/kittens")
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::put()
        .uri("/kittens/2")
        .set_json(json!({ "name": "WHISKERS" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri("/kittens/2")
        .set_json(json!({ "name": "snowy paws", "color": "Cream" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["message"], "The kitten has been updated");
    assert_eq!(updated["kitten"]["name"], "Snowy Paws");
    assert_eq!(updated["kitten"]["color"], "Cream");
    assert_eq!(updated["kitten"]["age"], 1);
}

#[actix_web::test]
async fn test_health_and_metrics() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("requests_total"));
}
