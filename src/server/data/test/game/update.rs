use super::*;

/// Tests replacing every field of an existing game.
///
/// Expected: Ok(Some(game)) and the stored row reflects the new values
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _second) = factory::seed_catalog(db).await?;

    let release_date = Utc.with_ymd_and_hms(2020, 2, 29, 8, 30, 0).unwrap();
    let repo = GameRepository::new(db);
    let result = repo
        .update(UpdateGameParam {
            id: first.id,
            title: "Altered Title".to_string(),
            genre: "Strategy".to_string(),
            description: "changed".to_string(),
            price: 12.5,
            release_date,
            stock_quantity: 0,
        })
        .await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().title, "Altered Title");

    let stored = entity::prelude::Game::find_by_id(first.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Altered Title");
    assert_eq!(stored.genre, "Strategy");
    assert_eq!(stored.description, "changed");
    assert_eq!(stored.price, 12.5);
    assert_eq!(stored.release_date, release_date);
    assert_eq!(stored.stock_quantity, 0);

    Ok(())
}

/// Tests that updating one game leaves the others untouched.
///
/// Expected: Ok with the second seeded game unchanged
#[tokio::test]
async fn leaves_other_games_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, second) = factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    repo.update(UpdateGameParam {
        id: first.id,
        title: "Altered Title".to_string(),
        genre: first.genre.clone(),
        description: first.description.clone(),
        price: first.price,
        release_date: first.release_date,
        stock_quantity: first.stock_quantity,
    })
    .await?;

    let stored = entity::prelude::Game::find_by_id(second.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, second);

    Ok(())
}

/// Tests updating a game that doesn't exist.
///
/// Verifies that a zero-row update is reported as absent rather than as an error
/// and that no row is created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .update(UpdateGameParam {
            id: 500,
            title: "Non-existing Game".to_string(),
            genre: "Adventure".to_string(),
            description: "Non-existing adventure game".to_string(),
            price: 700.0,
            release_date: Utc::now(),
            stock_quantity: 200,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}
