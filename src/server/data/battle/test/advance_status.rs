use super::*;

/// Tests a valid compare-and-set status transition.
///
/// Expected: Ok(true) and the stored status updated
#[tokio::test]
async fn advances_when_status_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = BattleRepository::new(db);
    let advanced = repo
        .advance_status(battle.id, BattleStatus::Open, BattleStatus::Closed)
        .await?;

    assert!(advanced);

    let stored = repo.find_by_id(battle.id).await?.unwrap();
    assert_eq!(stored.status, BattleStatus::Closed);

    Ok(())
}

/// Tests that a stale transition does not apply.
///
/// The battle has already moved on; a second admin holding the old view must
/// not be able to re-run the transition.
///
/// Expected: Ok(false) and the stored status untouched
#[tokio::test]
async fn refuses_when_status_is_stale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_battle_with_status(db, "published").await?;

    let repo = BattleRepository::new(db);
    let advanced = repo
        .advance_status(battle.id, BattleStatus::Open, BattleStatus::Closed)
        .await?;

    assert!(!advanced);

    let stored = repo.find_by_id(battle.id).await?.unwrap();
    assert_eq!(stored.status, BattleStatus::Published);

    Ok(())
}
