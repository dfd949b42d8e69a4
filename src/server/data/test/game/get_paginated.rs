use super::*;

/// Tests listing the seeded catalog on the first page.
///
/// Expected: Ok with both seeded games in ID order
#[tokio::test]
async fn returns_all_games_on_first_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let games = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 1,
            page_size: 10,
        })
        .await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].title, "Test Game 1");
    assert_eq!(games[1].title, "Test Game 2");

    Ok(())
}

/// Tests that pages skip `(page_number - 1) * page_size` rows.
///
/// Expected: Ok with the correct slice for each page
#[tokio::test]
async fn offsets_by_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::game::create_game(db).await?.id);
    }

    let repo = GameRepository::new(db);

    let page_one = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 1,
            page_size: 2,
        })
        .await?;
    let page_two = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 2,
            page_size: 2,
        })
        .await?;
    let page_three = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 3,
            page_size: 2,
        })
        .await?;

    assert_eq!(
        page_one.iter().map(|g| g.id).collect::<Vec<_>>(),
        ids[0..2].to_vec()
    );
    assert_eq!(
        page_two.iter().map(|g| g.id).collect::<Vec<_>>(),
        ids[2..4].to_vec()
    );
    assert_eq!(
        page_three.iter().map(|g| g.id).collect::<Vec<_>>(),
        ids[4..5].to_vec()
    );

    Ok(())
}

/// Tests requesting a page past the end of the catalog.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let games = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 5,
            page_size: 10,
        })
        .await?;

    assert!(games.is_empty());

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let games = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: 1,
            page_size: 10,
        })
        .await?;

    assert!(games.is_empty());

    Ok(())
}

/// Tests page numbers whose row offset does not fit in a signed 64-bit integer.
///
/// Covers an offset just above `i64::MAX`, an offset that overflows `u64`,
/// and the largest page number the controller accepts.
///
/// Expected: Ok(empty) for every page, without a database error
#[tokio::test]
async fn returns_empty_when_offset_exceeds_sql_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let params = [
        GetPaginatedGamesParam {
            page_number: 4_611_686_018_427_387_905,
            page_size: 2,
        },
        GetPaginatedGamesParam {
            page_number: i64::MAX as u64,
            page_size: 100,
        },
        GetPaginatedGamesParam {
            page_number: u64::MAX,
            page_size: u64::MAX,
        },
    ];

    for param in params {
        let games = repo.get_paginated(param).await?;
        assert!(games.is_empty(), "expected no games for {param:?}");
    }

    Ok(())
}

/// Tests the last page whose offset still fits in a signed 64-bit integer.
///
/// Expected: Ok(empty) from the database query
#[tokio::test]
async fn returns_empty_at_largest_bindable_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_catalog(db).await?;

    let repo = GameRepository::new(db);
    let games = repo
        .get_paginated(GetPaginatedGamesParam {
            page_number: i64::MAX as u64 + 1,
            page_size: 1,
        })
        .await?;

    assert!(games.is_empty());

    Ok(())
}
