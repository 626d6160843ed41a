use super::*;

/// Tests creating a new battle.
///
/// Verifies that the repository creates an open battle with the provided
/// dates and group labels.
///
/// Expected: Ok with battle created in the open status
#[tokio::test]
async fn creates_open_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BattleRepository::new(db);
    let date = Utc::now() + chrono::Duration::days(7);
    let deadline = Utc::now() + chrono::Duration::days(5);

    let battle = repo
        .create(date, deadline, vec!["1".to_string(), "2".to_string()])
        .await?;

    assert!(battle.id > 0);
    assert_eq!(battle.status, BattleStatus::Open);
    assert_eq!(battle.groups, vec!["1".to_string(), "2".to_string()]);
    assert!(battle.formation.is_none());

    // Verify battle exists in database
    let stored = repo.find_by_id(battle.id).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().status, BattleStatus::Open);

    Ok(())
}

/// Tests that the partial unique index rejects a second open battle.
///
/// The first battle is still open; inserting another open row must fail at
/// the storage level regardless of any service-side check.
///
/// Expected: Err on the second create
#[tokio::test]
async fn rejects_second_open_battle_at_storage_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // The schema generated from the entity lacks the partial index, so
    // create it the same way the migration does.
    use sea_orm::ConnectionTrait;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX idx_battle_single_open ON battle (status) WHERE status = 'open'",
    )
    .await?;

    let repo = BattleRepository::new(db);
    let date = Utc::now() + chrono::Duration::days(7);
    let deadline = Utc::now() + chrono::Duration::days(5);

    repo.create(date, deadline, vec!["1".to_string()]).await?;
    let second = repo.create(date, deadline, vec!["1".to_string()]).await;

    assert!(second.is_err());

    Ok(())
}
