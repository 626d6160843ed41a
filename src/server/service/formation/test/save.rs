use super::*;

/// Tests saving a valid formation on an open battle.
///
/// Expected: Ok, with the payload stored on the battle
#[tokio::test]
async fn saves_valid_formation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    FormationService::new(db)
        .save(
            &admin,
            battle.id,
            one_slot("1", "進攻隊", "鐵衣", "warrior01"),
            &test_roster(),
        )
        .await?;

    let stored = BattleRepository::new(db)
        .find_by_id(battle.id)
        .await?
        .unwrap();
    assert!(stored.formation.unwrap().contains("warrior01"));

    Ok(())
}

/// Tests the one-slot-per-member invariant across teams.
///
/// The same member appears in two different (group, team, job) cells; the
/// save must fail and name the member.
///
/// Expected: Err(Conflict) containing the game ID
#[tokio::test]
async fn rejects_member_in_two_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let formation = Formation {
        groups: vec![
            FormationGroup {
                label: "1".to_string(),
                teams: vec![FormationTeam {
                    name: "進攻隊".to_string(),
                    slots: vec![FormationSlot {
                        job: "鐵衣".to_string(),
                        game_id: Some("warrior01".to_string()),
                    }],
                }],
            },
            FormationGroup {
                label: "2".to_string(),
                teams: vec![FormationTeam {
                    name: "防守隊".to_string(),
                    slots: vec![FormationSlot {
                        job: "素問".to_string(),
                        game_id: Some("warrior01".to_string()),
                    }],
                }],
            },
        ],
    };

    let result = FormationService::new(db)
        .save(&admin, battle.id, formation, &test_roster())
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert!(message.contains("warrior01")),
        other => panic!("expected conflict, got {:?}", other.err()),
    }

    Ok(())
}

/// Tests that empty slots never count as duplicates.
///
/// Expected: Ok with several unassigned cells
#[tokio::test]
async fn allows_many_empty_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let formation = Formation {
        groups: vec![FormationGroup {
            label: "1".to_string(),
            teams: vec![FormationTeam {
                name: "進攻隊".to_string(),
                slots: vec![
                    FormationSlot {
                        job: "鐵衣".to_string(),
                        game_id: None,
                    },
                    FormationSlot {
                        job: "素問".to_string(),
                        game_id: None,
                    },
                    FormationSlot {
                        job: "血河".to_string(),
                        game_id: Some("warrior01".to_string()),
                    },
                ],
            }],
        }],
    };

    let result = FormationService::new(db)
        .save(&admin, battle.id, formation, &test_roster())
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests label validation against the roster and the battle's groups.
///
/// Expected: Err(Validation) for unknown group, team, and job labels
#[tokio::test]
async fn rejects_unknown_labels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let service = FormationService::new(db);
    let roster = test_roster();

    // Group "9" is not configured for this battle.
    let bad_group = service
        .save(
            &admin,
            battle.id,
            one_slot("9", "進攻隊", "鐵衣", "warrior01"),
            &roster,
        )
        .await;
    assert!(matches!(bad_group, Err(AppError::Validation(_))));

    let bad_team = service
        .save(
            &admin,
            battle.id,
            one_slot("1", "不存在隊", "鐵衣", "warrior01"),
            &roster,
        )
        .await;
    assert!(matches!(bad_team, Err(AppError::Validation(_))));

    let bad_job = service
        .save(
            &admin,
            battle.id,
            one_slot("1", "進攻隊", "不存在", "warrior01"),
            &roster,
        )
        .await;
    assert!(matches!(bad_job, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that saving replaces the stored formation wholesale.
///
/// Expected: only the members of the second save remain assigned
#[tokio::test]
async fn save_overwrites_not_merges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_open_battle(db).await?;

    let service = FormationService::new(db);
    let roster = test_roster();

    service
        .save(
            &admin,
            battle.id,
            one_slot("1", "進攻隊", "鐵衣", "warrior01"),
            &roster,
        )
        .await?;
    service
        .save(
            &admin,
            battle.id,
            one_slot("2", "防守隊", "素問", "warrior02"),
            &roster,
        )
        .await?;

    let stored = BattleRepository::new(db)
        .find_by_id(battle.id)
        .await?
        .unwrap()
        .formation
        .unwrap();

    assert!(stored.contains("warrior02"));
    assert!(!stored.contains("warrior01"));

    Ok(())
}

/// Tests that the formation locks once the battle is published.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_save_after_publish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let battle = factory::create_battle_with_status(db, "published").await?;

    let result = FormationService::new(db)
        .save(
            &admin,
            battle.id,
            one_slot("1", "進攻隊", "鐵衣", "warrior01"),
            &test_roster(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
