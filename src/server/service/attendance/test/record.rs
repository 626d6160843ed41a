use super::*;
use crate::{
    model::formation::{Formation, FormationGroup, FormationSlot, FormationTeam},
    server::data::battle::BattleRepository,
};

fn formation_with(game_id: &str) -> Formation {
    Formation {
        groups: vec![FormationGroup {
            label: "1".to_string(),
            teams: vec![FormationTeam {
                name: "進攻隊".to_string(),
                slots: vec![FormationSlot {
                    job: "鐵衣".to_string(),
                    game_id: Some(game_id.to_string()),
                }],
            }],
        }],
    }
}

/// Tests the fan-out over registrations with a formation present.
///
/// Candidates are the registration rows; `attended` mirrors presence in the
/// final formation.
///
/// Expected: one row per registration, outcomes matching placement
#[tokio::test]
async fn records_one_row_per_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_battle_with_status(db, "published").await?;
    factory::create_registration(db, "placed01", battle.id).await?;
    factory::create_registration(db, "benched01", battle.id).await?;

    let repo = BattleRepository::new(db);
    repo.set_formation(battle.id, &formation_with("placed01"))
        .await?;
    let battle = repo.find_by_id(battle.id).await?.unwrap();

    let written = AttendanceService::new(db).record(&battle).await?;
    assert_eq!(written, 2);

    let attendance = AttendanceRepository::new(db);
    assert!(attendance.list_by_game_id("placed01").await?[0].attended);
    assert!(!attendance.list_by_game_id("benched01").await?[0].attended);

    Ok(())
}

/// Tests the fan-out when no formation was ever saved.
///
/// Every registered member is recorded absent rather than erroring out.
///
/// Expected: rows with attended = false
#[tokio::test]
async fn records_absences_without_formation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_battle_with_status(db, "published").await?;
    factory::create_registration(db, "warrior01", battle.id).await?;

    let battle = BattleRepository::new(db)
        .find_by_id(battle.id)
        .await?
        .unwrap();

    let written = AttendanceService::new(db).record(&battle).await?;
    assert_eq!(written, 1);

    let records = AttendanceRepository::new(db)
        .list_by_game_id("warrior01")
        .await?;
    assert!(!records[0].attended);

    Ok(())
}

/// Tests that re-running the fan-out skips existing rows.
///
/// A retry after a partial failure must complete the write without
/// duplicating pairs that already succeeded.
///
/// Expected: second run writes only the missing row
#[tokio::test]
async fn rerun_skips_existing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_battle_with_status(db, "published").await?;
    factory::create_registration(db, "warrior01", battle.id).await?;

    let battle_model = BattleRepository::new(db)
        .find_by_id(battle.id)
        .await?
        .unwrap();

    let service = AttendanceService::new(db);
    assert_eq!(service.record(&battle_model).await?, 1);

    // A second member registers between runs (late partial-failure retry).
    factory::create_registration(db, "warrior02", battle.id).await?;
    assert_eq!(service.record(&battle_model).await?, 1);

    let attendance = AttendanceRepository::new(db);
    assert_eq!(attendance.list_by_game_id("warrior01").await?.len(), 1);
    assert_eq!(attendance.list_by_game_id("warrior02").await?.len(), 1);

    Ok(())
}
