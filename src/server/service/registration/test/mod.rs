mod proxy;

use super::*;
use chrono::Duration;
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
