use super::*;

/// Tests finding the open battle when one exists.
///
/// Expected: Ok(Some) with the open battle
#[tokio::test]
async fn finds_the_open_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_battle_with_status(db, "confirmed").await?;
    let open = factory::create_open_battle(db).await?;

    let repo = BattleRepository::new(db);
    let found = repo.find_open().await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, open.id);

    Ok(())
}

/// Tests finding the open battle when none exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_open_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_battle_with_status(db, "closed").await?;

    let repo = BattleRepository::new(db);
    let found = repo.find_open().await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the current battle falls back to the latest unconfirmed one.
///
/// With no open battle, the boundary still needs to resolve the battle being
/// managed (closed or published) so formation work can continue.
///
/// Expected: Ok(Some) with the closed battle
#[tokio::test]
async fn current_falls_back_to_unconfirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_battle_with_status(db, "confirmed").await?;
    let closed = factory::create_battle_with_status(db, "closed").await?;

    let repo = BattleRepository::new(db);
    let found = repo.find_current().await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, closed.id);

    Ok(())
}
