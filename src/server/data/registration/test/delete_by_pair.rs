use super::*;

/// Tests cancelling an existing registration.
///
/// Expected: Ok(true) and no residual row — storage returns to the
/// pre-register state
#[tokio::test]
async fn deletes_existing_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;
    factory::create_registration(db, "warrior01", battle.id).await?;

    let repo = RegistrationRepository::new(db);
    let deleted = repo.delete_by_pair("warrior01", battle.id).await?;

    assert!(deleted);
    assert!(repo.find_by_pair("warrior01", battle.id).await?.is_none());
    assert_eq!(repo.count_by_battle(battle.id).await?, 0);

    Ok(())
}

/// Tests cancelling when no registration exists.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = RegistrationRepository::new(db);
    let deleted = repo.delete_by_pair("warrior01", battle.id).await?;

    assert!(!deleted);

    Ok(())
}
