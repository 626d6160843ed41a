use super::*;

/// Tests listing registrations for one battle only.
///
/// Registrations of other battles must not leak into the list.
///
/// Expected: Ok with only the target battle's rows, in sign-up order
#[tokio::test]
async fn lists_only_target_battle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;
    let other = factory::create_battle_with_status(db, "confirmed").await?;

    factory::create_registration(db, "warrior01", battle.id).await?;
    factory::create_registration(db, "warrior02", battle.id).await?;
    factory::create_registration(db, "warrior03", other.id).await?;

    let repo = RegistrationRepository::new(db);
    let rows = repo.list_by_battle(battle.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].game_id, "warrior01");
    assert_eq!(rows[1].game_id, "warrior02");

    Ok(())
}

/// Tests the member-delete cascade helper.
///
/// Expected: all of the member's rows across battles are removed
#[tokio::test]
async fn deletes_all_rows_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;
    let other = factory::create_battle_with_status(db, "confirmed").await?;

    factory::create_registration(db, "warrior01", battle.id).await?;
    factory::create_registration(db, "warrior01", other.id).await?;
    factory::create_registration(db, "warrior02", battle.id).await?;

    let repo = RegistrationRepository::new(db);
    let removed = repo.delete_by_game_id("warrior01").await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.count_by_battle(battle.id).await?, 1);

    Ok(())
}
