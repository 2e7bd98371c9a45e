//! API Integration Tests
//!
//! Drive the full router on in-memory repositories; no external services
//! are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use integration_tests::TestApp;
use serde_json::json;
use snippets_common::PaginationConfig;
use snippets_core::AuditAction;

// ============================================================================
// Root & Health
// ============================================================================

#[tokio::test]
async fn test_api_root_links() {
    let app = TestApp::new().unwrap();

    let response = app.get("/", None).await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["users"], "/users/");
    assert_eq!(response.body["snippets"], "/snippets/");
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().unwrap();

    let response = app.get("/health", None).await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new().unwrap();

    let response = app.get("/health/ready", None).await.unwrap();
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

// ============================================================================
// Snippets
// ============================================================================

#[tokio::test]
async fn test_create_snippet_records_one_audit_entry() {
    let app = TestApp::new().unwrap();
    let (alice, token) = app.login("alice", false).await.unwrap();

    let response = app
        .post(
            "/snippets/",
            Some(&token),
            json!({"title": "Test", "code": "print('Hi')"}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.body["title"], "Test");
    assert_eq!(response.body["owner"], "alice");
    assert_eq!(response.body["language"], "python");
    assert_eq!(response.body["url"], format!("/snippets/{id}/"));
    assert_eq!(response.body["highlight"], format!("/snippets/{id}/highlight/"));

    let entries = app.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].model_name, "Snippet");
    assert_eq!(entries[0].object_id, id.to_string());
    assert_eq!(entries[0].action, AuditAction::Create);
    assert_eq!(entries[0].user_id, Some(alice.id));
}

#[tokio::test]
async fn test_anonymous_cannot_create_snippet() {
    let app = TestApp::new().unwrap();

    let response = app
        .post("/snippets/", None, json!({"code": "x = 1"}))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.snippets.count(), 0);
    assert_eq!(app.audit.count(), 0);
}

#[tokio::test]
async fn test_anonymous_can_read_snippets() {
    let app = TestApp::new().unwrap();
    let (_, token) = app.login("alice", false).await.unwrap();
    app.post("/snippets/", Some(&token), json!({"code": "a = 1"}))
        .await
        .unwrap();

    let list = app.get("/snippets/", None).await.unwrap();
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["count"], 1);
    assert_eq!(list.body["results"][0]["owner"], "alice");

    let id = list.body["results"][0]["id"].as_i64().unwrap();
    let detail = app.get(&format!("/snippets/{id}"), None).await.unwrap();
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["code"], "a = 1");
}

#[tokio::test]
async fn test_highlight_returns_html() {
    let app = TestApp::new().unwrap();
    let (_, token) = app.login("alice", false).await.unwrap();
    let created = app
        .post(
            "/snippets/",
            Some(&token),
            json!({"title": "Greeting", "code": "print('Hi')\nprint('Bye')", "linenos": true}),
        )
        .await
        .unwrap();
    let id = created.body["id"].as_i64().unwrap();

    let response = app
        .get(&format!("/snippets/{id}/highlight/"), None)
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Greeting</title>"));
    assert!(html.contains("highlighttable"));
}

#[tokio::test]
async fn test_unknown_language_is_rejected() {
    let app = TestApp::new().unwrap();
    let (_, token) = app.login("alice", false).await.unwrap();

    let response = app
        .post(
            "/snippets/",
            Some(&token),
            json!({"code": "x", "language": "no-such-language"}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("UNKNOWN_LANGUAGE"));
    assert_eq!(app.audit.count(), 0);
}

#[tokio::test]
async fn test_only_owner_may_change_snippet() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    let (_, bob) = app.login("bob", false).await.unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();

    let created = app
        .post("/snippets/", Some(&alice), json!({"code": "a = 1"}))
        .await
        .unwrap();
    let path = format!("/snippets/{}/", created.body["id"]);

    for token in [&bob, &staff] {
        let patch = app
            .patch(&path, Some(token), json!({"title": "mine"}))
            .await
            .unwrap();
        assert_eq!(patch.status, StatusCode::FORBIDDEN);

        let delete = app.delete(&path, Some(token)).await.unwrap();
        assert_eq!(delete.status, StatusCode::FORBIDDEN);
    }

    let anonymous = app.delete(&path, None).await.unwrap();
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    // Only the create entry
    assert_eq!(app.audit.count(), 1);
}

#[tokio::test]
async fn test_owner_updates_and_deletes_snippet() {
    let app = TestApp::new().unwrap();
    let (alice_user, alice) = app.login("alice", false).await.unwrap();

    let created = app
        .post("/snippets/", Some(&alice), json!({"title": "v1", "code": "a = 1"}))
        .await
        .unwrap();
    let id = created.body["id"].as_i64().unwrap();
    let path = format!("/snippets/{id}/");

    let patched = app
        .patch(&path, Some(&alice), json!({"title": "v2"}))
        .await
        .unwrap();
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["title"], "v2");
    assert_eq!(patched.body["code"], "a = 1");

    let replaced = app
        .put(&path, Some(&alice), json!({"code": "b = 2", "linenos": true}))
        .await
        .unwrap();
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.body["code"], "b = 2");
    assert_eq!(replaced.body["linenos"], true);
    let stored = app.snippets.stored(id).unwrap();
    assert!(stored.highlighted.contains("highlighttable"));

    let deleted = app.delete(&path, Some(&alice)).await.unwrap();
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(app.snippets.stored(id).is_none());

    let actions: Vec<AuditAction> = app.audit.entries().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Create,
            AuditAction::Update,
            AuditAction::Update,
            AuditAction::Destroy
        ]
    );
    assert!(app
        .audit
        .entries()
        .iter()
        .all(|e| e.user_id == Some(alice_user.id) && e.object_id == id.to_string()));
}

#[tokio::test]
async fn test_put_requires_code() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    let created = app
        .post("/snippets/", Some(&alice), json!({"code": "a = 1"}))
        .await
        .unwrap();

    let response = app
        .put(
            &format!("/snippets/{}/", created.body["id"]),
            Some(&alice),
            json!({"title": "no code"}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_snippet_is_not_found() {
    let app = TestApp::new().unwrap();

    let response = app.get("/snippets/999/", None).await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("UNKNOWN_SNIPPET"));
}

#[tokio::test]
async fn test_snippet_pagination() {
    let app = TestApp::with_pagination(PaginationConfig {
        page_size: 2,
        max_page_size: 10,
    })
    .unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    for n in 0..5 {
        app.post("/snippets/", Some(&alice), json!({"code": format!("n = {n}")}))
            .await
            .unwrap();
    }

    let first = app.get("/snippets/", None).await.unwrap();
    assert_eq!(first.body["count"], 5);
    assert_eq!(first.body["results"].as_array().unwrap().len(), 2);
    assert_eq!(first.body["next"], 2);
    assert!(first.body["previous"].is_null());

    let last = app.get("/snippets/?page=3", None).await.unwrap();
    assert_eq!(last.body["results"].as_array().unwrap().len(), 1);
    assert!(last.body["next"].is_null());
    assert_eq!(last.body["previous"], 2);

    let bad = app.get("/snippets/?page=abc", None).await.unwrap();
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let zero = app.get("/snippets/?page=0", None).await.unwrap();
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
    assert_eq!(zero.error_code(), Some("INVALID_QUERY_PARAMETER"));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_non_staff_never_sees_deleted_users() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();

    let deleted = app
        .delete(&format!("/users/{}/", bob.id), Some(&staff))
        .await
        .unwrap();
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    for path in ["/users/", "/users/?include_deleted=true"] {
        let response = app.get(path, Some(&alice)).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        let results = response.body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|u| u["is_deleted"] == false));
    }

    let hidden = app
        .get(&format!("/users/{}/?include_deleted=true", bob.id), Some(&alice))
        .await
        .unwrap();
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_staff_include_deleted() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();
    app.delete(&format!("/users/{}/", bob.id), Some(&staff))
        .await
        .unwrap();

    let active = app.get("/users/", Some(&staff)).await.unwrap();
    assert_eq!(active.body["count"], 1);

    let all = app
        .get("/users/?include_deleted=true", Some(&staff))
        .await
        .unwrap();
    assert_eq!(all.body["count"], 2);

    let bogus = app
        .get("/users/?include_deleted=maybe", Some(&staff))
        .await
        .unwrap();
    assert_eq!(bogus.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anonymous_cannot_list_users() {
    let app = TestApp::new().unwrap();

    let response = app.get("/users/", None).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_destroy_keeps_row_and_rejects_repeat() {
    let app = TestApp::new().unwrap();
    let (root, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();
    let path = format!("/users/{}/", bob.id);

    let response = app.delete(&path, Some(&staff)).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let stored = app.users.stored(bob.id).unwrap();
    assert!(stored.is_deleted);
    assert!(stored.deleted_at.is_some());
    assert_eq!(app.users.count(), 2);

    let hidden = app.get(&path, Some(&staff)).await.unwrap();
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);

    let visible = app
        .get(&format!("{path}?include_deleted=true"), Some(&staff))
        .await
        .unwrap();
    assert_eq!(visible.status, StatusCode::OK);
    assert_eq!(visible.body["is_deleted"], true);
    assert!(visible.body["deleted_at"].is_string());

    let again = app.delete(&path, Some(&staff)).await.unwrap();
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.error_code(), Some("USER_ALREADY_DELETED"));

    let entries = app.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].model_name, "User");
    assert_eq!(entries[0].object_id, bob.id.to_string());
    assert_eq!(entries[0].action, AuditAction::Destroy);
    assert_eq!(entries[0].user_id, Some(root.id));
}

#[tokio::test]
async fn test_non_staff_cannot_manage_users() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();

    let create = app
        .post("/users/", Some(&alice), json!({"username": "carol"}))
        .await
        .unwrap();
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let delete = app
        .delete(&format!("/users/{}/", bob.id), Some(&alice))
        .await
        .unwrap();
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
    assert!(!app.users.stored(bob.id).unwrap().is_deleted);
    assert_eq!(app.audit.count(), 0);
}

#[tokio::test]
async fn test_staff_creates_user() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();

    let response = app
        .post(
            "/users/",
            Some(&staff),
            json!({"username": "carol", "email": "carol@example.com", "password": "carol-password"}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["username"], "carol");
    assert_eq!(response.body["is_staff"], false);
    assert_eq!(response.body["is_deleted"], false);

    let duplicate = app
        .post("/users/", Some(&staff), json!({"username": "carol"}))
        .await
        .unwrap();
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let entries = app.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Create);
    assert_eq!(entries[0].model_name, "User");

    // The new account can log in
    let login = app
        .post(
            "/api/token/",
            None,
            json!({"username": "carol", "password": "carol-password"}),
        )
        .await
        .unwrap();
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_restore_through_patch() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();
    let path = format!("/users/{}/", bob.id);
    app.delete(&path, Some(&staff)).await.unwrap();

    let hidden = app
        .patch(&path, Some(&staff), json!({"is_deleted": false}))
        .await
        .unwrap();
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);

    let restored = app
        .patch(
            &format!("{path}?include_deleted=true"),
            Some(&staff),
            json!({"is_deleted": false}),
        )
        .await
        .unwrap();
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["is_deleted"], false);
    assert!(restored.body["deleted_at"].is_null());
    assert!(!app.users.stored(bob.id).unwrap().is_deleted);

    let actions: Vec<AuditAction> = app.audit.entries().iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![AuditAction::Destroy, AuditAction::Update]);
}

#[tokio::test]
async fn test_soft_delete_through_update_is_rejected() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();

    let response = app
        .patch(
            &format!("/users/{}/", bob.id),
            Some(&staff),
            json!({"is_deleted": true}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!app.users.stored(bob.id).unwrap().is_deleted);
    assert_eq!(app.audit.count(), 0);
}

#[tokio::test]
async fn test_bulk_soft_delete() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();
    let carol = app.create_user("carol", "carol-password", false).await.unwrap();
    app.delete(&format!("/users/{}/", carol.id), Some(&staff))
        .await
        .unwrap();

    let response = app
        .post(
            "/admin/users/soft-delete",
            Some(&staff),
            json!({"ids": [bob.id, bob.id, carol.id, 999]}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["deleted"], json!([bob.id]));
    assert_eq!(response.body["skipped"], json!([carol.id, 999]));
    assert!(app.users.stored(bob.id).unwrap().is_deleted);

    let destroys = app
        .audit
        .entries()
        .iter()
        .filter(|e| e.action == AuditAction::Destroy)
        .count();
    assert_eq!(destroys, 2);

    let empty = app
        .post("/admin/users/soft-delete/", Some(&staff), json!({"ids": []}))
        .await
        .unwrap();
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_token_pair_and_refresh() {
    let app = TestApp::new().unwrap();
    app.create_user("alice", "alice-password", false)
        .await
        .unwrap();

    let pair = app
        .post(
            "/api/token/",
            None,
            json!({"username": "alice", "password": "alice-password"}),
        )
        .await
        .unwrap();
    assert_eq!(pair.status, StatusCode::OK);
    assert_eq!(pair.body["token_type"], "Bearer");
    let access = pair.body["access_token"].as_str().unwrap().to_string();
    let refresh = pair.body["refresh_token"].as_str().unwrap().to_string();

    let users = app.get("/users", Some(&access)).await.unwrap();
    assert_eq!(users.status, StatusCode::OK);

    let refreshed = app
        .post("/api/token/refresh/", None, json!({"refresh_token": refresh}))
        .await
        .unwrap();
    assert_eq!(refreshed.status, StatusCode::OK);
    assert!(refreshed.body["access_token"].is_string());

    // A refresh token is not an access token
    let misuse = app.get("/users/", Some(&refresh)).await.unwrap();
    assert_eq!(misuse.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::new().unwrap();
    app.create_user("alice", "alice-password", false)
        .await
        .unwrap();

    for body in [
        json!({"username": "alice", "password": "nope-nope"}),
        json!({"username": "nobody", "password": "alice-password"}),
    ] {
        let response = app.post("/api/token/", None, body).await.unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), Some("INVALID_CREDENTIALS"));
    }
}

#[tokio::test]
async fn test_api_token_auth() {
    let app = TestApp::new().unwrap();
    app.create_user("alice", "alice-password", false)
        .await
        .unwrap();
    let credentials = json!({"username": "alice", "password": "alice-password"});

    let first = app
        .post("/api-token-auth/", None, credentials.clone())
        .await
        .unwrap();
    assert_eq!(first.status, StatusCode::OK);
    let key = first.body["token"].as_str().unwrap().to_string();
    assert_eq!(key.len(), 40);

    let second = app.post("/api-token-auth", None, credentials).await.unwrap();
    assert_eq!(second.body["token"], key.as_str());

    let created = app
        .request_with_authorization(
            axum::http::Method::POST,
            "/snippets/",
            Some(&format!("Token {key}")),
            Some(json!({"code": "x = 1"})),
        )
        .await
        .unwrap();
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["owner"], "alice");

    let unknown = app
        .request_with_authorization(
            axum::http::Method::GET,
            "/users/",
            Some("Token not-a-real-key"),
            None,
        )
        .await
        .unwrap();
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request_with_authorization(axum::http::Method::GET, "/users/", Some("Basic abc"), None)
        .await
        .unwrap();
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_user_cannot_authenticate() {
    let app = TestApp::new().unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();
    let bob_token = app.bearer(&bob).unwrap();

    app.delete(&format!("/users/{}/", bob.id), Some(&staff))
        .await
        .unwrap();

    let with_token = app.get("/users/", Some(&bob_token)).await.unwrap();
    assert_eq!(with_token.status, StatusCode::UNAUTHORIZED);

    let login = app
        .post(
            "/api/token/",
            None,
            json!({"username": "bob", "password": "bob-password"}),
        )
        .await
        .unwrap();
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
    assert_eq!(login.error_code(), Some("ACCOUNT_DISABLED"));
}

// ============================================================================
// Audit log
// ============================================================================

#[tokio::test]
async fn test_audit_log_is_staff_only() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();

    let anonymous = app.get("/auditlogs/", None).await.unwrap();
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let user = app.get("/auditlogs/", Some(&alice)).await.unwrap();
    assert_eq!(user.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_audit_log_listing_and_filters() {
    let app = TestApp::new().unwrap();
    let (alice_user, alice) = app.login("alice", false).await.unwrap();
    let (_, staff) = app.login("root", true).await.unwrap();
    let bob = app.create_user("bob", "bob-password", false).await.unwrap();

    let created = app
        .post("/snippets/", Some(&alice), json!({"code": "a = 1"}))
        .await
        .unwrap();
    app.patch(
        &format!("/snippets/{}/", created.body["id"]),
        Some(&alice),
        json!({"title": "t"}),
    )
    .await
    .unwrap();
    app.delete(&format!("/users/{}/", bob.id), Some(&staff))
        .await
        .unwrap();

    let all = app.get("/auditlogs/", Some(&staff)).await.unwrap();
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["count"], 3);
    // Newest first
    assert_eq!(all.body["results"][0]["action"], "destroy");
    assert_eq!(all.body["results"][0]["model_name"], "User");
    assert_eq!(all.body["results"][2]["action"], "create");

    let snippets = app
        .get("/auditlogs?model_name=Snippet", Some(&staff))
        .await
        .unwrap();
    assert_eq!(snippets.body["count"], 2);

    let by_user = app
        .get(
            &format!("/auditlogs/?user_id={}&action=update", alice_user.id),
            Some(&staff),
        )
        .await
        .unwrap();
    assert_eq!(by_user.body["count"], 1);
    assert_eq!(by_user.body["results"][0]["user"], alice_user.id);

    let unknown_action = app
        .get("/auditlogs/?action=rename", Some(&staff))
        .await
        .unwrap();
    assert_eq!(unknown_action.status, StatusCode::BAD_REQUEST);

    let zero_page = app.get("/auditlogs/?page=0", Some(&staff)).await.unwrap();
    assert_eq!(zero_page.status, StatusCode::BAD_REQUEST);
    assert_eq!(zero_page.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_audit_write_failure_surfaces_as_bad_request() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();
    app.audit_logger.set_failing(true);

    let response = app
        .post("/snippets/", Some(&alice), json!({"code": "a = 1"}))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("AUDIT_LOG_FAILED"));
    // The write that preceded the audit stays in place
    assert_eq!(app.snippets.count(), 1);
    assert_eq!(app.audit.count(), 0);
}

// ============================================================================
// Request handling
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::new().unwrap();
    let (_, alice) = app.login("alice", false).await.unwrap();

    let response = app
        .post("/snippets/", Some(&alice), json!({"code": 42}))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("INVALID_BODY"));
}

#[tokio::test]
async fn test_invalid_path_id() {
    let app = TestApp::new().unwrap();

    let response = app.get("/snippets/abc/", None).await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
