//! Search endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_search_ranking() {
    let app = test_app();
    let prefix = app.create_member("Salem Omar", None).await;
    let substring = app.create_member("Abu Salem", None).await;
    let exact = app.create_member("Salem", None).await;

    let (status, json) = app.get("/search?q=salem").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![exact, prefix, substring]);
}

#[tokio::test]
async fn test_search_case_insensitive() {
    let app = test_app();
    let id = app.create_member("Salem", None).await;

    let (_, json) = app.get("/search?q=SALEM").await;
    assert_eq!(json[0]["id"], id);
}

#[tokio::test]
async fn test_search_empty_query_yields_nothing() {
    let app = test_app();
    app.create_member("Salem", None).await;

    for uri in ["/search?q=", "/search", "/search?q=%20%20"] {
        let (status, json) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            json.as_array().unwrap().is_empty(),
            "expected no hits for {uri}"
        );
    }
}

#[tokio::test]
async fn test_search_no_match() {
    let app = test_app();
    app.create_member("Salem", None).await;

    let (status, json) = app.get("/search?q=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_limit() {
    let app = test_app();
    for i in 0..5 {
        app.create_member(&format!("Salem {i}"), None).await;
    }

    let (_, json) = app.get("/search?q=salem&limit=3").await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_matches_branch_name() {
    let app = test_app();
    let id = app.create_member("Omar", None).await;
    let token = admin_token();
    app.put_json(
        &format!("/members/{id}"),
        &json!({"branch_name": "Aldossary"}),
        Some(&token),
    )
    .await;

    let (_, json) = app.get("/search?q=aldossary").await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], id);
}

#[tokio::test]
async fn test_search_repeated_calls_identical() {
    let app = test_app();
    for name in ["Salem A", "Salem B", "Salem C"] {
        app.create_member(name, None).await;
    }

    let (_, first) = app.get("/search?q=salem").await;
    for _ in 0..3 {
        let (_, again) = app.get("/search?q=salem").await;
        assert_eq!(first, again);
    }
}
