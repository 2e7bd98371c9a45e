//! Live server tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test live_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, Auth, TestServer, STAFF_PASSWORD,
};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready", Auth::None).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_snippet_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = server.staff_token().await.unwrap();

    let username = unique_username("writer");
    let response = server
        .post("/users/", Auth::Bearer(&staff), &new_user_body(&username, "writer-password", false))
        .await
        .unwrap();
    let writer: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token = server.access_token(&username, "writer-password").await.unwrap();

    let response = server
        .post("/snippets/", Auth::Bearer(&token), &new_snippet_body("Test", "print('Hi')"))
        .await
        .unwrap();
    let snippet: SnippetBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(snippet.owner, username);
    assert!(snippet.linenos);

    let response = server
        .get(&snippet.highlight, Auth::None)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Test</title>"));

    let response = server
        .patch(&snippet.url, Auth::Bearer(&token), &json!({"title": "Renamed"}))
        .await
        .unwrap();
    let updated: SnippetBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");

    let response = server.delete(&snippet.url, Auth::Bearer(&token)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let path = format!(
        "/auditlogs/?model_name=Snippet&object_id={}",
        snippet.id
    );
    let response = server.get(&path, Auth::Bearer(&staff)).await.unwrap();
    let page: PageBody<AuditLogBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let actions: Vec<&str> = page.results.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["destroy", "update", "create"]);
    assert!(page.results.iter().all(|e| e.user == Some(writer.id)));
}

#[tokio::test]
async fn test_user_soft_delete_and_restore() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = server.staff_token().await.unwrap();

    let username = unique_username("leaver");
    let response = server
        .post("/users/", Auth::Bearer(&staff), &new_user_body(&username, "leaver-password", false))
        .await
        .unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete(&user.url, Auth::Bearer(&staff)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&user.url, Auth::Bearer(&staff)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let with_deleted = format!("{}?include_deleted=true", user.url);
    let response = server.get(&with_deleted, Auth::Bearer(&staff)).await.unwrap();
    let deleted: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.is_deleted);
    assert!(deleted.deleted_at.is_some());

    let response = server.delete(&user.url, Auth::Bearer(&staff)).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USER_ALREADY_DELETED");

    let login = Credentials::new(&username, "leaver-password");
    let response = server.post("/api/token/", Auth::None, &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .patch(&with_deleted, Auth::Bearer(&staff), &json!({"is_deleted": false}))
        .await
        .unwrap();
    let restored: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!restored.is_deleted);

    server.access_token(&username, "leaver-password").await.unwrap();
}

#[tokio::test]
async fn test_api_token_header() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::new(server.staff_username.clone(), STAFF_PASSWORD);

    let response = server.post("/api-token-auth/", Auth::None, &credentials).await.unwrap();
    let token: ApiTokenBody = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get("/users/", Auth::Token(&token.token)).await.unwrap();
    let page: PageBody<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.count >= 1);
    assert!(page.results.iter().all(|u| !u.is_deleted));
}
