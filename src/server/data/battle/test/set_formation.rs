use super::*;
use crate::model::formation::{FormationGroup, FormationSlot, FormationTeam};

fn sample_formation(game_id: &str) -> Formation {
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

/// Tests saving and reloading a formation payload.
///
/// Expected: the stored formation round-trips through the JSON column
#[tokio::test]
async fn stores_formation_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = BattleRepository::new(db);
    let formation = sample_formation("warrior01");
    repo.set_formation(battle.id, &formation).await?;

    let stored = repo.find_by_id(battle.id).await?.unwrap();
    assert_eq!(stored.formation, Some(formation));

    Ok(())
}

/// Tests that saving replaces the previous payload wholesale.
///
/// Expected: only the second formation remains
#[tokio::test]
async fn replaces_previous_formation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let battle = factory::create_open_battle(db).await?;

    let repo = BattleRepository::new(db);
    repo.set_formation(battle.id, &sample_formation("warrior01"))
        .await?;
    repo.set_formation(battle.id, &sample_formation("warrior02"))
        .await?;

    let stored = repo.find_by_id(battle.id).await?.unwrap();
    let formation = stored.formation.unwrap();

    assert!(formation.contains("warrior02"));
    assert!(!formation.contains("warrior01"));

    Ok(())
}
