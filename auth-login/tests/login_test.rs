use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use eventia_auth_login::{create_app, AppState};
use eventia_shared::{password, MemoryUserStore, UserStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const TEST_COST: u32 = 4;

/// App with one pre-registered credential, the way the registration
/// service would have left the shared store.
async fn app_with_alice() -> Router {
    let store = MemoryUserStore::new();
    let hashed = password::hash_password("pw1", TEST_COST).unwrap();
    store.insert("alice", &hashed).await.unwrap();

    create_app(AppState {
        store: Arc::new(store),
        db_name: "eventia_db".to_string(),
        bcrypt_cost: TEST_COST,
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn login_with_correct_password_is_idempotent() {
    let app = app_with_alice().await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/login", r#"{"username":"alice","password":"pw1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Usuario 'alice' autenticado correctamente.");
    }
}

#[tokio::test]
async fn wrong_password_is_unauthorized_never_not_found() {
    let app = app_with_alice().await;

    let response = app
        .oneshot(post_json("/login", r#"{"username":"alice","password":"wrong"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Contraseña incorrecta.");
}

#[tokio::test]
async fn unknown_username_is_not_found_never_unauthorized() {
    let app = app_with_alice().await;

    let response = app
        .oneshot(post_json("/login", r#"{"username":"bob","password":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Usuario no registrado.");
}

#[tokio::test]
async fn add_user_then_login_round_trip() {
    let app = app_with_alice().await;

    let added = app
        .clone()
        .oneshot(post_json("/add_user", r#"{"username":"carol","password":"pw3"}"#))
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::OK);
    let body = body_json(added).await;
    assert_eq!(body["message"], "Usuario 'carol' agregado a AuthLogin.");

    let login = app
        .oneshot(post_json("/login", r#"{"username":"carol","password":"pw3"}"#))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_user_rejects_duplicates() {
    let app = app_with_alice().await;

    let response = app
        .oneshot(post_json("/add_user", r#"{"username":"alice","password":"pw9"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Usuario ya existe");
}

#[tokio::test]
async fn listing_shows_usernames_only() {
    let app = app_with_alice().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["usuarios"], serde_json::json!(["alice"]));

    let text = serde_json::to_string(&body).unwrap();
    assert!(!text.contains("$2"));
}
