//! Behaviour tests for registration, user listing, and login.

// Harness helpers are shared with the blog suite; not all are used here.
#[allow(dead_code)]
mod support;

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
use backend::server::build_app;
use serde_json::{Value, json};

use support::{seed_blog, seed_user, test_state, token_for_missing_user, user_count};

#[actix_web::test]
async fn registration_returns_a_projection_without_the_hash() {
    let state = test_state();
    let app = init_service(build_app(state.clone())).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "root", "name": "Root", "password": "sekret" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["username"], "root");
    assert_eq!(body["name"], "Root");
    assert!(body["id"].is_string());
    assert_eq!(body["blogs"], json!([]));
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    // The stored document holds a salted hash, not the raw password.
    let stored = state
        .users
        .find_by_username("root")
        .await
        .expect("lookup")
        .expect("persisted");
    assert_ne!(stored.password_hash.as_str(), "sekret");
}

#[actix_web::test]
async fn short_or_missing_passwords_are_rejected_without_persisting() {
    let state = test_state();
    let app = init_service(build_app(state.clone())).await;

    for body in [
        json!({ "username": "root", "name": "Root", "password": "pw" }),
        json!({ "username": "root", "name": "Root" }),
    ] {
        let response = call_service(
            &app,
            TestRequest::post()
                .uri("/api/users")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload: Value = read_body_json(response).await;
        assert_eq!(
            payload["error"],
            "a password is required, and must be more than 3 characters long"
        );
    }
    assert_eq!(user_count(&state).await, 0);
}

#[actix_web::test]
async fn missing_or_short_usernames_are_rejected() {
    let state = test_state();
    let app = init_service(build_app(state.clone())).await;

    for body in [
        json!({ "name": "Root", "password": "sekret" }),
        json!({ "username": "ab", "name": "Root", "password": "sekret" }),
    ] {
        let response = call_service(
            &app,
            TestRequest::post()
                .uri("/api/users")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(user_count(&state).await, 0);
}

#[actix_web::test]
async fn duplicate_usernames_surface_the_uniqueness_violation() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = init_service(build_app(state.clone())).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "root", "name": "Other", "password": "sekret" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(response).await;
    let message = body["error"].as_str().expect("message");
    assert!(message.contains("expected `username` to be unique"));
    assert_eq!(user_count(&state).await, 1);
}

#[actix_web::test]
async fn listing_users_projects_their_blogs() {
    let state = test_state();
    let user = seed_user(&state, "root", "sekret").await;
    let blog = seed_blog(&state, Some(&user), "React patterns", "https://reactpatterns.com/")
        .await;
    let app = init_service(build_app(state.clone())).await;

    let response = call_service(&app, TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_body_json(response).await;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 1);

    let projected = &items[0]["blogs"][0];
    assert_eq!(projected["id"], json!(blog.id));
    assert_eq!(projected["title"], "React patterns");
    assert_eq!(projected["url"], "https://reactpatterns.com/");
    assert_eq!(projected["likes"], 0);
    // The owner reference is implicit; the projection carries no user field.
    assert!(projected.get("user").is_none());
}

#[actix_web::test]
async fn login_issues_a_token_the_blog_endpoints_accept() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = init_service(build_app(state.clone())).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "root", "password": "sekret" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["username"], "root");
    let token = body["token"].as_str().expect("token");

    let created = call_service(
        &app,
        TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "T", "url": "u" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn wrong_credentials_are_rejected_uniformly() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = init_service(build_app(state.clone())).await;

    for body in [
        json!({ "username": "root", "password": "wrong" }),
        json!({ "username": "nobody", "password": "sekret" }),
        json!({ "username": "", "password": "sekret" }),
    ] {
        let response = call_service(
            &app,
            TestRequest::post()
                .uri("/api/login")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let payload: Value = read_body_json(response).await;
        assert_eq!(payload["error"], "invalid username or password");
    }
}

#[actix_web::test]
async fn tokens_for_unknown_subjects_are_unauthenticated() {
    let state = test_state();
    let token = token_for_missing_user(&state);
    let app = init_service(build_app(state.clone())).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "T", "url": "u" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(response).await;
    assert_eq!(body["error"], "invalid token");
}
