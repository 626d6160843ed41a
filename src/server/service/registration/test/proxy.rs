use super::*;

/// Tests a proxy sign-up by another member.
///
/// Expected: Ok with proxy metadata recorded against the target
#[tokio::test]
async fn proxy_registers_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_member(db).await?;
    let target = factory::create_member(db).await?;
    let target_id = target.game_id.clone().unwrap();
    let battle = factory::create_open_battle(db).await?;

    let registration = RegistrationService::new(db)
        .proxy_register(&actor, &target_id, battle.id, "出差無法上線", &test_roster())
        .await?;

    assert_eq!(registration.game_id, target_id);
    assert!(registration.is_proxy);
    assert_eq!(registration.proxy_by, actor.game_id);
    assert_eq!(registration.proxy_reason.as_deref(), Some("出差無法上線"));

    Ok(())
}

/// Tests that a blank reason is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_empty_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_member(db).await?;
    let target = factory::create_member(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let result = RegistrationService::new(db)
        .proxy_register(
            &actor,
            target.game_id.as_deref().unwrap(),
            battle.id,
            "   ",
            &test_roster(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the admin-only proxy policy.
///
/// With member proxy disabled, a non-admin actor is refused while an admin
/// still goes through.
///
/// Expected: Err(Policy) for the member, Ok for the admin
#[tokio::test]
async fn honors_admin_only_policy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut roster = test_roster();
    roster.allow_member_proxy = false;

    let actor = factory::create_member(db).await?;
    let admin = factory::create_admin(db).await?;
    let target = factory::create_member(db).await?;
    let target_id = target.game_id.clone().unwrap();
    let battle = factory::create_open_battle(db).await?;

    let service = RegistrationService::new(db);

    let denied = service
        .proxy_register(&actor, &target_id, battle.id, "reason", &roster)
        .await;
    assert!(matches!(denied, Err(AppError::Policy(_))));

    let allowed = service
        .proxy_register(&admin, &target_id, battle.id, "reason", &roster)
        .await;
    assert!(allowed.is_ok());

    Ok(())
}

/// Tests proxy against an unknown target.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_member(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let result = RegistrationService::new(db)
        .proxy_register(&actor, "ghost01", battle.id, "reason", &test_roster())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the target's leave still blocks a proxy sign-up.
///
/// Expected: Err(Policy)
#[tokio::test]
async fn rejects_target_on_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_member(db).await?;
    let target = test_utils::factory::user::UserFactory::new(db)
        .game_id("resting02")
        .job("九靈")
        .on_leave(true)
        .build()
        .await?;
    let battle = factory::create_open_battle(db).await?;

    let result = RegistrationService::new(db)
        .proxy_register(
            &actor,
            target.game_id.as_deref().unwrap(),
            battle.id,
            "reason",
            &test_roster(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Policy(_))));

    Ok(())
}
