use super::*;

/// Tests retrieving an existing game by ID.
///
/// Expected: Ok(Some(game))
#[tokio::test]
async fn returns_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::game::create_game(db).await?;

    let repo = GameRepository::new(db);
    let game = repo.get_by_id(created.id).await?;

    assert!(game.is_some());
    let game = game.unwrap();
    assert_eq!(game.id, created.id);
    assert_eq!(game.title, created.title);
    assert_eq!(game.release_date, created.release_date);

    Ok(())
}

/// Tests retrieving a non-existent game.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
