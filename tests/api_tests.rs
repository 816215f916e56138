use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use indiesight_api::api::{create_router, AppState};
use indiesight_api::models::{
    AttributeVector, Catalog, CategorySchema, GameDescription, Item, OwnershipRecord,
};
use indiesight_api::store::InMemoryOwnershipStore;

fn xy(x: f64, y: f64) -> AttributeVector {
    AttributeVector::new(vec![("x".to_string(), x), ("y".to_string(), y)])
}

fn abc_catalog() -> Catalog {
    Catalog::new(
        CategorySchema::new(["x", "y"]),
        vec![
            Item::new("A", xy(1.0, 0.0)),
            Item::new("B", xy(0.0, 1.0)),
            Item::new("C", xy(1.0, 1.0)),
        ],
    )
    .unwrap()
}

fn create_test_server(catalog: Catalog, records: Vec<OwnershipRecord>) -> TestServer {
    let store = Arc::new(InMemoryOwnershipStore::with_records(records));
    let state = AppState::new(catalog, store);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(abc_catalog(), Vec::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_list_games_in_catalog_order() {
    let server = create_test_server(abc_catalog(), Vec::new());
    let response = server.get("/games").await;
    response.assert_status_ok();

    let games: Vec<Value> = response.json();
    let names: Vec<&str> = games.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(games[2]["attributes"], json!({"x": 1.0, "y": 1.0}));
    assert_eq!(games[0]["description"], Value::Null);
}

#[tokio::test]
async fn test_get_single_game() {
    let server = create_test_server(abc_catalog(), Vec::new());

    let response = server.get("/games/B").await;
    response.assert_status_ok();
    let game: Value = response.json();
    assert_eq!(game["attributes"], json!({"x": 0.0, "y": 1.0}));

    let response = server.get("/games/Missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Game 'Missing' is not in the catalog");
}

#[tokio::test]
async fn test_add_and_list_owned_games() {
    let server = create_test_server(abc_catalog(), Vec::new());

    let response = server
        .post("/users/ana/games")
        .json(&json!({ "game": "A" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created, json!({"username": "ana", "game": "A"}));

    // Duplicates are kept
    server
        .post("/users/ana/games")
        .json(&json!({ "game": "A" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/users/ana/games").await;
    response.assert_status_ok();
    let owned: Value = response.json();
    assert_eq!(owned["games"], json!(["A", "A"]));

    let users: Vec<String> = server.get("/users").await.json();
    assert_eq!(users, vec!["ana"]);
}

#[tokio::test]
async fn test_add_empty_game_is_rejected() {
    let server = create_test_server(abc_catalog(), Vec::new());
    let response = server
        .post("/users/ana/games")
        .json(&json!({ "game": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Game must not be empty");
}

#[tokio::test]
async fn test_add_with_padded_username_is_rejected() {
    let server = create_test_server(abc_catalog(), Vec::new());
    let response = server
        .post("/users/ana%20/games")
        .json(&json!({ "game": "A" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username must not have surrounding whitespace");

    let games: Value = server.get("/users/ana/games").await.json();
    assert_eq!(games["games"], json!([]));
    let users: Vec<String> = server.get("/users").await.json();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_add_unknown_game_is_accepted() {
    let server = create_test_server(abc_catalog(), Vec::new());
    server
        .post("/users/ana/games")
        .json(&json!({ "game": "Not In Catalog" }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_recommendations_worked_example() {
    let server = create_test_server(abc_catalog(), vec![OwnershipRecord::new("ana", "A")]);

    let response = server.get("/users/ana/recommendations").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["available"], true);
    assert_eq!(body["total"], 3);
    assert_eq!(body["has_previous"], false);
    assert_eq!(body["has_next"], false);

    let recs = body["recommendations"].as_array().unwrap();
    let ranked: Vec<(u64, &str, f64, &str)> = recs
        .iter()
        .map(|r| {
            (
                r["rank"].as_u64().unwrap(),
                r["game"].as_str().unwrap(),
                r["score"].as_f64().unwrap(),
                r["tier"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        ranked,
        vec![
            (1, "A", 100.0, "high"),
            (2, "C", 50.0, "medium"),
            (3, "B", 0.0, "low"),
        ]
    );
}

#[tokio::test]
async fn test_recommendations_for_user_without_history() {
    let server = create_test_server(abc_catalog(), vec![OwnershipRecord::new("ana", "A")]);

    let response = server.get("/users/newcomer/recommendations").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["available"], false);
    assert_eq!(body["total"], 0);
    assert!(body["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommendations_with_empty_catalog() {
    let catalog = Catalog::empty(CategorySchema::new(["x", "y"]));
    let server = create_test_server(catalog, vec![OwnershipRecord::new("ana", "A")]);

    let response = server.get("/users/ana/recommendations").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_recommendations_are_paginated() {
    let schema = CategorySchema::new(["x", "y"]);
    let items: Vec<Item> = (0..25)
        .map(|i| Item::new(format!("Game {i:02}"), xy(i as f64, 0.0)))
        .collect();
    let catalog = Catalog::new(schema, items).unwrap();
    let server = create_test_server(catalog, vec![OwnershipRecord::new("ana", "Game 00")]);

    let first: Value = server.get("/users/ana/recommendations").await.json();
    assert_eq!(first["total"], 25);
    assert_eq!(first["page_size"], 10);
    assert_eq!(first["recommendations"].as_array().unwrap().len(), 10);
    assert_eq!(first["recommendations"][0]["game"], "Game 00");
    assert_eq!(first["has_next"], true);

    let last: Value = server
        .get("/users/ana/recommendations")
        .add_query_param("page", 2)
        .await
        .json();
    let recs = last["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0]["rank"], 21);
    assert_eq!(recs[4]["game"], "Game 24");
    assert_eq!(recs[4]["score"], 0.0);
    assert_eq!(last["has_previous"], true);
    assert_eq!(last["has_next"], false);
}

#[tokio::test]
async fn test_profile_endpoint() {
    let server = create_test_server(
        abc_catalog(),
        vec![
            OwnershipRecord::new("ana", "A"),
            OwnershipRecord::new("ana", "C"),
            OwnershipRecord::new("ana", "Gone"),
        ],
    );

    let body: Value = server.get("/users/ana/profile").await.json();
    assert_eq!(body["profile"]["attributes"], json!({"x": 1.0, "y": 0.5}));
    assert_eq!(body["profile"]["matched"], 2);
    assert_eq!(body["profile"]["skipped"], 1);

    let body: Value = server.get("/users/nobody/profile").await.json();
    assert_eq!(body["profile"], Value::Null);
}

#[tokio::test]
async fn test_descriptions_are_attached() {
    let store = Arc::new(InMemoryOwnershipStore::with_records(vec![
        OwnershipRecord::new("ana", "B"),
    ]));
    let descriptions = HashMap::from([(
        "B".to_string(),
        GameDescription {
            image: "https://img.example/b.png".to_string(),
            description: "The B game".to_string(),
        },
    )]);
    let state = AppState::new(abc_catalog(), store).with_descriptions(descriptions);
    let server = TestServer::new(create_router(state)).unwrap();

    let body: Value = server.get("/users/ana/recommendations").await.json();
    let top = &body["recommendations"][0];
    assert_eq!(top["game"], "B");
    assert_eq!(top["description"]["description"], "The B game");
    assert_eq!(body["recommendations"][1]["description"], Value::Null);
}
