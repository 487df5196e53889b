//! Statistics endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_stats_empty_store() {
    let app = test_app();

    let (status, json) = app.get("/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
    assert_eq!(json["living"], 0);
    assert_eq!(json["deceased"], 0);
    assert_eq!(json["generations"], 0);
}

#[tokio::test]
async fn test_stats_three_generations() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    let b = app.create_member("Bb", Some(a)).await;
    app.create_member("Cc", Some(b)).await;

    let (_, json) = app.get("/stats").await;

    assert_eq!(json["total"], 3);
    assert_eq!(json["living"], 3);
    assert_eq!(json["deceased"], 0);
    assert_eq!(json["generations"], 3);
}

#[tokio::test]
async fn test_stats_reflect_alive_flag() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    app.create_member("Bb", Some(a)).await;
    let token = admin_token();

    app.put_json(
        &format!("/members/{a}"),
        &json!({"is_alive": false}),
        Some(&token),
    )
    .await;

    let (_, json) = app.get("/stats").await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["living"], 1);
    assert_eq!(json["deceased"], 1);
}

#[tokio::test]
async fn test_stats_recomputed_after_delete() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    let b = app.create_member("Bb", Some(a)).await;
    let token = admin_token();

    let (_, before) = app.get("/stats").await;
    assert_eq!(before["generations"], 2);

    app.delete(&format!("/members/{b}"), Some(&token)).await;

    let (_, after) = app.get("/stats").await;
    assert_eq!(after["total"], 1);
    assert_eq!(after["generations"], 1);
}
