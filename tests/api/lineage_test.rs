//! Person, lineage, children, and roots endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_person_with_lineage_chain() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    let b = app.create_member("Bb", Some(a)).await;
    let c = app.create_member("Cc", Some(b)).await;

    let (status, json) = app.get(&format!("/person/{c}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["person"]["id"], c);

    let chain: Vec<i64> = json["lineage"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(chain, vec![a, b, c]);
}

#[tokio::test]
async fn test_root_lineage_is_itself() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;

    let (status, json) = app.get(&format!("/person/{a}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["lineage"].as_array().unwrap().len(), 1);
    assert_eq!(json["lineage"][0]["id"], a);
}

#[tokio::test]
async fn test_person_unknown_is_404() {
    let app = test_app();

    let (status, json) = app.get("/person/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_children_in_creation_order() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    let c1 = app.create_member("Second", Some(a)).await;
    let c2 = app.create_member("First", Some(a)).await;

    let (status, json) = app.get(&format!("/children/{a}")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    // creation order, not name order
    assert_eq!(ids, vec![c1, c2]);
}

#[tokio::test]
async fn test_children_of_leaf_is_empty() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;

    let (status, json) = app.get(&format!("/children/{a}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_children_of_unknown_is_404() {
    let app = test_app();

    let (status, json) = app.get("/children/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_roots_listing() {
    let app = test_app();
    let a = app.create_member("Aa", None).await;
    let b = app.create_member("Bb", None).await;
    app.create_member("Cc", Some(a)).await;

    let (status, json) = app.get("/roots").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[tokio::test]
async fn test_roots_limit() {
    let app = test_app();
    for i in 0..5 {
        app.create_member(&format!("Root {i}"), None).await;
    }

    let (status, json) = app.get("/roots?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}
