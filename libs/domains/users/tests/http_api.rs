//! End-to-end tests of the users router over the in-memory repository.
//!
//! These exercise the external contract: routes, status codes, and the
//! response body shapes the frontend consumes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, UserService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    Router::new().nest("/users", handlers::router(service))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn john_doe() -> Value {
    json!({
        "userName": "johndoe",
        "firstName": "John",
        "lastName": "Doe",
        "email": "john@doe.com",
        "status": "A",
        "department": "IT"
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["userName"], "johndoe");
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["email"], "john@doe.com");
    assert_eq!(body["status"], "A");
    assert_eq!(body["department"], "IT");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_list_returns_created_users_in_id_order() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();
    let mut second = john_doe();
    second["userName"] = json!("janedoe");
    second["email"] = json!("jane@doe.com");
    app.clone()
        .oneshot(json_request("POST", "/users", &second))
        .await
        .unwrap();

    let response = app.oneshot(get("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[1]["id"], 2);
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_array() {
    let response = app().oneshot(get("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_get_round_trips_created_user() {
    let app = app();

    let created = body_json(
        app.clone()
            .oneshot(json_request("POST", "/users", &john_doe()))
            .await
            .unwrap(),
    )
    .await;

    let response = app.oneshot(get("/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let response = app().oneshot(get("/users/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_non_integer_id_returns_400() {
    let response = app().oneshot(get("/users/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_create_with_short_user_name_returns_field_error() {
    let mut payload = john_doe();
    payload["userName"] = json!("abc");

    let app = app();
    let response = app
        .clone()
        .oneshot(json_request("POST", "/users", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["details"]["user_name"].is_array());

    // Nothing was written
    let list = body_json(app.oneshot(get("/users")).await.unwrap()).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let payload = json!({
        "userName": "johndoe",
        "firstName": "John"
    });

    let response = app()
        .oneshot(json_request("POST", "/users", &payload))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_duplicate_email_returns_409_with_field() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    let mut second = john_doe();
    second["userName"] = json!("janedoe");
    let response = app
        .oneshot(json_request("POST", "/users", &second))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Conflict");
    assert_eq!(body["details"]["field"], "email");
}

#[tokio::test]
async fn test_duplicate_user_name_wins_over_duplicate_email() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["details"]["field"], "userName");
}

#[tokio::test]
async fn test_put_replaces_all_fields() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    let replacement = json!({
        "userName": "janedoe",
        "firstName": "Jane",
        "lastName": "Smith",
        "email": "jane@smith.com",
        "status": "I",
        "department": null
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/users/1", &replacement))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["userName"], "janedoe");
    assert_eq!(body["status"], "I");
    assert_eq!(body["department"], Value::Null);

    let fetched = body_json(app.oneshot(get("/users/1")).await.unwrap()).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_put_with_own_email_does_not_conflict() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    let mut replacement = john_doe();
    replacement["department"] = json!("Research");
    let response = app
        .oneshot(json_request("PUT", "/users/1", &replacement))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["department"], "Research");
}

#[tokio::test]
async fn test_put_missing_user_returns_404() {
    let response = app()
        .oneshot(json_request("PUT", "/users/77", &john_doe()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_without_body() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/users", &john_doe()))
        .await
        .unwrap();

    let response = app.clone().oneshot(delete("/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let response = app.oneshot(get("/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let response = app().oneshot(delete("/users/5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_whitespace_department_rejected_but_empty_stored() {
    let app = app();

    let mut blank = john_doe();
    blank["department"] = json!("   ");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/users", &blank))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut empty = john_doe();
    empty["department"] = json!("");
    let response = app
        .oneshot(json_request("POST", "/users", &empty))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["department"], "");
}

#[tokio::test]
async fn test_invalid_status_never_reaches_storage() {
    let mut payload = john_doe();
    payload["status"] = json!("Z");

    let app = app();
    let response = app
        .clone()
        .oneshot(json_request("POST", "/users", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(app.oneshot(get("/users")).await.unwrap()).await;
    assert_eq!(list, json!([]));
}
