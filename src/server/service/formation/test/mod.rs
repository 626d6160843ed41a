mod save;

use super::*;
use crate::model::formation::{FormationGroup, FormationSlot, FormationTeam};
use test_utils::{builder::TestBuilder, factory};

fn test_roster() -> RosterConfig {
    RosterConfig {
        jobs: ["素問", "血河", "九靈", "龍吟", "碎夢", "神相", "鐵衣"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        teams: ["進攻隊", "防守隊", "機動隊"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        default_groups: vec!["1".to_string(), "2".to_string()],
        allow_member_proxy: true,
    }
}

/// Formation with a single assigned slot.
fn one_slot(group: &str, team: &str, job: &str, game_id: &str) -> Formation {
    Formation {
        groups: vec![FormationGroup {
            label: group.to_string(),
            teams: vec![FormationTeam {
                name: team.to_string(),
                slots: vec![FormationSlot {
                    job: job.to_string(),
                    game_id: Some(game_id.to_string()),
                }],
            }],
        }],
    }
}
