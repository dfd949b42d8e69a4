use super::*;

/// Tests deleting a game.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, second) = factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let result = repo.delete(first.id).await;

    assert!(result.is_ok());

    let check = entity::prelude::Game::find_by_id(first.id).one(db).await?;
    assert!(check.is_none());
    let remaining = entity::prelude::Game::find_by_id(second.id).one(db).await?;
    assert!(remaining.is_some());

    Ok(())
}

/// Tests deleting a non-existent game succeeds.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
