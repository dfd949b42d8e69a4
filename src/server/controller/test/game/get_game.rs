use super::*;

/// Tests fetching an existing game.
///
/// Expected: 200 with the game in camelCase JSON
#[tokio::test]
async fn returns_existing_game() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let (first, _second) = factory::seed_catalog(db).await.unwrap();

    let response = app(db)
        .oneshot(request("GET", &format!("/api/games/{}", first.id), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], first.id);
    assert_eq!(body["title"], "Test Game 1");
    assert_eq!(body["genre"], "Action");
    assert_eq!(body["stockQuantity"], 100);
    assert!(body["releaseDate"].is_string());
}

/// Tests fetching a game that doesn't exist.
///
/// Expected: 404 with a message naming the ID
#[tokio::test]
async fn returns_not_found_for_missing_game() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    factory::seed_catalog(db).await.unwrap();

    let response = app(db)
        .oneshot(request("GET", "/api/games/999", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Game with ID 999 not found." })
    );
}

/// Tests that a non-numeric ID is rejected by path extraction.
///
/// Expected: 400
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(request("GET", "/api/games/abc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
