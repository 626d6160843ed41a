use super::*;

/// Tests opening a battle when none is open.
///
/// Expected: Ok with an open battle carrying the given dates and groups
#[tokio::test]
async fn opens_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let date = Utc::now() + Duration::days(7);
    let deadline = Utc::now() + Duration::days(5);

    let service = BattleService::new(db);
    let battle = service
        .open(&admin, date, deadline, vec!["1".to_string(), "2".to_string()])
        .await?;

    assert_eq!(battle.status, BattleStatus::Open);
    assert_eq!(battle.groups.len(), 2);
    assert_eq!(service.open_battle().await?.unwrap().id, battle.id);

    Ok(())
}

/// Tests the single-open-battle invariant.
///
/// At most one battle may be open at any time; a second open attempt while
/// the first is still open must be rejected.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_second_open_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    factory::create_open_battle(db).await?;

    let result = BattleService::new(db)
        .open(
            &admin,
            Utc::now() + Duration::days(14),
            Utc::now() + Duration::days(12),
            vec!["1".to_string()],
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a new battle may open once the previous one is confirmed.
///
/// Expected: Ok
#[tokio::test]
async fn allows_open_after_previous_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    factory::create_battle_with_status(db, "confirmed").await?;

    let result = BattleService::new(db)
        .open(
            &admin,
            Utc::now() + Duration::days(7),
            Utc::now() + Duration::days(5),
            vec!["1".to_string()],
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a deadline after the battle date is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_deadline_after_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let result = BattleService::new(db)
        .open(
            &admin,
            Utc::now() + Duration::days(5),
            Utc::now() + Duration::days(7),
            vec!["1".to_string()],
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
