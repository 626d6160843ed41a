use super::*;
use crate::server::service::attendance::format_rate;

/// Tests the summary for a member with no history.
///
/// Expected: zero counts and rate "0.00"
#[tokio::test]
async fn empty_history_has_zero_rate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let summary = AttendanceService::new(db).user_summary(&member).await?;

    assert_eq!(summary.stats.attended, 0);
    assert_eq!(summary.stats.absent, 0);
    assert_eq!(summary.stats.rate, "0.00");
    assert!(summary.records.is_empty());

    Ok(())
}

/// Tests aggregation over a mixed history.
///
/// Three attended out of four total battles is a 75.00 rate with one absence.
///
/// Expected: attended 3, absent 1, rate "75.00", entries in battle order
#[tokio::test]
async fn aggregates_mixed_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let game_id = member.game_id.clone().unwrap();

    let repo = AttendanceRepository::new(db);
    for attended in [true, true, false, true] {
        let battle = factory::create_battle_with_status(db, "confirmed").await?;
        repo.create(&game_id, battle.id, attended).await?;
    }

    let summary = AttendanceService::new(db).user_summary(&member).await?;

    assert_eq!(summary.stats.attended, 3);
    assert_eq!(summary.stats.absent, 1);
    assert_eq!(summary.stats.rate, "75.00");
    assert_eq!(summary.records.len(), 4);

    Ok(())
}

/// Tests the summary entries carry the team from the confirmed formation.
///
/// Expected: team name present for placed battles, absent otherwise
#[tokio::test]
async fn entries_carry_team_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let game_id = member.game_id.clone().unwrap();

    let placed_battle = test_utils::factory::battle::BattleFactory::new(db)
        .status("confirmed")
        .formation(serde_json::json!({
            "groups": [{
                "label": "1",
                "teams": [{
                    "name": "機動隊",
                    "slots": [{"job": "鐵衣", "game_id": game_id}]
                }]
            }]
        }))
        .build()
        .await?;
    let benched_battle = factory::create_battle_with_status(db, "confirmed").await?;

    let repo = AttendanceRepository::new(db);
    repo.create(&game_id, placed_battle.id, true).await?;
    repo.create(&game_id, benched_battle.id, false).await?;

    let summary = AttendanceService::new(db).user_summary(&member).await?;

    let placed_entry = summary
        .records
        .iter()
        .find(|entry| entry.attended)
        .unwrap();
    assert_eq!(placed_entry.team.as_deref(), Some("機動隊"));

    let benched_entry = summary
        .records
        .iter()
        .find(|entry| !entry.attended)
        .unwrap();
    assert!(benched_entry.team.is_none());

    Ok(())
}

/// Tests the rate formatting helper across edge values.
#[test]
fn rate_formatting() {
    assert_eq!(format_rate(0, 0), "0.00");
    assert_eq!(format_rate(1, 1), "100.00");
    assert_eq!(format_rate(3, 4), "75.00");
    assert_eq!(format_rate(1, 3), "33.33");
}
