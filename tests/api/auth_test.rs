//! Login and admin credential tests

use crate::common::*;

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = test_app();

    let (status, json) = app
        .post_json(
            "/login",
            &json!({"username": "admin", "password": "family2026"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["token_type"], "bearer");
    assert!(json["access_token"].as_str().unwrap().contains('.'));
}

#[tokio::test]
async fn test_login_token_works_on_admin_route() {
    let app = test_app();
    let id = app.create_member("Salem", None).await;

    let (_, login) = app
        .post_json(
            "/login",
            &json!({"username": "admin", "password": "family2026"}),
        )
        .await;
    let token = login["access_token"].as_str().unwrap().to_string();

    let (status, json) = app
        .put_json(
            &format!("/members/{id}"),
            &json!({"branch_name": "Aldossary"}),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["branch_name"], "Aldossary");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app();

    let (status, json) = app
        .post_json("/login", &json!({"username": "admin", "password": "nope"}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_wrong_username() {
    let app = test_app();

    let (status, _) = app
        .post_json(
            "/login",
            &json!({"username": "root", "password": "family2026"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = test_app();

    let (status, json) = app.post_json("/login", &json!({"username": "admin"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_foreign_token_rejected() {
    let app = test_app();
    let id = app.create_member("Salem", None).await;

    let forged = kintree_server::auth::TokenSigner::from_secret("attacker-secret")
        .issue("admin", chrono::Duration::hours(1))
        .unwrap();

    let (status, json) = app
        .put_json(
            &format!("/members/{id}"),
            &json!({"branch_name": "X"}),
            Some(&forged),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_reads_need_no_token() {
    let app = test_app();
    app.create_member("Salem", None).await;

    for uri in ["/roots", "/members", "/stats", "/search?q=salem"] {
        let (status, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "open read failed for {uri}");
    }
}
