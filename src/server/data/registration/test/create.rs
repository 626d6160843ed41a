use super::*;

/// Tests inserting a registration row.
///
/// Expected: Ok with the stored fields matching the parameters
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(CreateRegistrationParam {
            game_id: "warrior01".to_string(),
            battle_id: battle.id,
            job: "鐵衣".to_string(),
            is_proxy: false,
            proxy_by: None,
            proxy_reason: None,
            is_alternate: false,
        })
        .await?;

    assert!(registration.id > 0);
    assert_eq!(registration.game_id, "warrior01");
    assert_eq!(registration.battle_id, battle.id);
    assert_eq!(registration.job, "鐵衣");
    assert!(!registration.is_alternate);

    Ok(())
}

/// Tests that the unique index rejects a duplicate (member, battle) pair.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_pair_at_storage_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    // The schema generated from the entity lacks the composite index, so
    // create it the same way the migration does.
    use sea_orm::ConnectionTrait;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX idx_registration_game_battle ON registration (game_id, battle_id)",
    )
    .await?;

    factory::create_registration(db, "warrior01", battle.id).await?;
    let duplicate = factory::create_registration(db, "warrior01", battle.id).await;

    assert!(duplicate.is_err());

    Ok(())
}

/// Tests that proxy fields are persisted.
///
/// Expected: Ok with proxy metadata stored
#[tokio::test]
async fn stores_proxy_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(CreateRegistrationParam {
            game_id: "warrior01".to_string(),
            battle_id: battle.id,
            job: "素問".to_string(),
            is_proxy: true,
            proxy_by: Some("admin01".to_string()),
            proxy_reason: Some("出差中".to_string()),
            is_alternate: true,
        })
        .await?;

    assert!(registration.is_proxy);
    assert_eq!(registration.proxy_by.as_deref(), Some("admin01"));
    assert_eq!(registration.proxy_reason.as_deref(), Some("出差中"));
    assert!(registration.is_alternate);

    Ok(())
}
