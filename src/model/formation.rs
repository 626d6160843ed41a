//! Typed formation payload.
//!
//! A formation assigns registered members to (group, team, job) slots for one
//! battle. The same structure is used on the wire and in storage (serialized
//! into the battle's JSON column), so it derives both `Serialize` and
//! `Deserialize`. Absence of an assignment is an explicit `None`, never a
//! missing key.

use serde::{Deserialize, Serialize};

/// Full formation for one battle: a list of groups, each with named teams.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Formation {
    pub groups: Vec<FormationGroup>,
}

/// One group ("1", "2", ...) holding the battle's teams.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormationGroup {
    pub label: String,
    pub teams: Vec<FormationTeam>,
}

/// A named team with one slot per job archetype.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormationTeam {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

/// A single (job, member) cell. `game_id` is `None` while unassigned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormationSlot {
    pub job: String,
    pub game_id: Option<String>,
}

/// Position of one member inside a formation.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SlotRef {
    pub group: String,
    pub team: String,
    pub job: String,
}

/// Body of `POST /api/formation/save`. Replaces the battle's formation
/// wholesale; there is no partial merge.
#[derive(Deserialize)]
pub struct SaveFormationRequest {
    pub formation: Formation,
}

/// A registered member offered as an option for a slot, grouped by job.
#[derive(Serialize, Clone)]
pub struct PoolPlayerDto {
    pub game_id: String,
    pub job: String,
    pub is_alternate: bool,
}

/// Payload of `GET /api/formation/read`.
///
/// Admins receive `formation` and `pool`; members receive only `slot`
/// (their own placement once the battle is published, or nothing).
#[derive(Serialize)]
pub struct FormationViewDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation: Option<Formation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<Vec<PoolPlayerDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotRef>,
}

impl Formation {
    /// Iterates occupied slots in submission order: groups, then teams, then jobs.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (&str, &str, &str, &str)> {
        self.groups.iter().flat_map(|group| {
            group.teams.iter().flat_map(move |team| {
                team.slots.iter().filter_map(move |slot| {
                    slot.game_id.as_deref().map(|game_id| {
                        (group.label.as_str(), team.name.as_str(), slot.job.as_str(), game_id)
                    })
                })
            })
        })
    }

    /// Whether the member occupies any slot.
    pub fn contains(&self, game_id: &str) -> bool {
        self.iter_assigned().any(|(_, _, _, id)| id == game_id)
    }

    /// Finds the slot a member occupies, if any.
    pub fn slot_of(&self, game_id: &str) -> Option<SlotRef> {
        self.iter_assigned()
            .find(|(_, _, _, id)| *id == game_id)
            .map(|(group, team, job, _)| SlotRef {
                group: group.to_string(),
                team: team.to_string(),
                job: job.to_string(),
            })
    }

    /// The name of the team a member is assigned to, if any.
    pub fn team_of(&self, game_id: &str) -> Option<String> {
        self.slot_of(game_id).map(|slot| slot.team)
    }
}
