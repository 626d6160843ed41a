use super::*;

/// Tests the full forward walk of the lifecycle state machine.
///
/// Expected: open → closed → published → confirmed, each step Ok
#[tokio::test]
async fn advances_through_full_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let service = BattleService::new(db);

    let battle_after_close = service.close(&admin, battle.id).await?;
    assert_eq!(battle_after_close.status, BattleStatus::Closed);

    let battle_after_publish = service.publish(&admin, battle.id).await?;
    assert_eq!(battle_after_publish.status, BattleStatus::Published);

    let battle_after_confirm = service.confirm(&admin, battle.id).await?;
    assert_eq!(battle_after_confirm.status, BattleStatus::Confirmed);

    Ok(())
}

/// Tests that out-of-order transitions are rejected.
///
/// Publishing an open battle, confirming a closed battle, and closing twice
/// must all fail without touching the stored status.
///
/// Expected: Err(Conflict) for each
#[tokio::test]
async fn rejects_out_of_order_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let service = BattleService::new(db);

    // open → published skips a state
    let publish = service.publish(&admin, battle.id).await;
    assert!(matches!(publish, Err(AppError::Conflict(_))));

    // open → confirmed skips two
    let confirm = service.confirm(&admin, battle.id).await;
    assert!(matches!(confirm, Err(AppError::Conflict(_))));

    service.close(&admin, battle.id).await?;

    // closing twice
    let close_again = service.close(&admin, battle.id).await;
    assert!(matches!(close_again, Err(AppError::Conflict(_))));

    // closed → confirmed still requires publish first
    let confirm_closed = service.confirm(&admin, battle.id).await;
    assert!(matches!(confirm_closed, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a confirmed battle cannot move anywhere.
///
/// Expected: Err(Conflict) for every transition
#[tokio::test]
async fn confirmed_battle_is_terminal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_battle_with_status(db, "confirmed").await?;

    let service = BattleService::new(db);

    assert!(matches!(
        service.close(&admin, battle.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.publish(&admin, battle.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.confirm(&admin, battle.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests transitions against a battle that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let result = BattleService::new(db).close(&admin, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
