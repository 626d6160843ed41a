//! Attendance recording and summaries.
//!
//! Attendance is derived, not entered: when a battle is confirmed, one record
//! is written per registration row, with `attended` set by presence in the
//! final formation. A member who signed up but was never placed gets an
//! `attended = false` row; a member placed without a registration does not
//! get a row.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::attendance::{AttendanceEntryDto, AttendanceStatsDto, AttendanceSummaryDto},
    server::{
        data::{
            attendance::AttendanceRepository, battle::BattleRepository,
            registration::RegistrationRepository,
        },
        error::AppError,
        model::battle::Battle,
    },
};

#[cfg(test)]
mod test;

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes attendance records for a battle being confirmed.
    ///
    /// Pairs that already have a record are skipped, so a retry after a
    /// partial failure completes the fan-out without duplicating rows. The
    /// once-per-battle property itself is guaranteed by the one-way confirm
    /// transition in the battle lifecycle.
    ///
    /// # Arguments
    /// - `battle` - The battle, carrying its final formation
    ///
    /// # Returns
    /// - `Ok(written)` - Number of records written by this call
    pub async fn record(&self, battle: &Battle) -> Result<u64, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .list_by_battle(battle.id)
            .await?;
        let repo = AttendanceRepository::new(self.db);

        let mut written = 0;
        for registration in registrations {
            if repo.exists(&registration.game_id, battle.id).await? {
                continue;
            }

            let attended = battle
                .formation
                .as_ref()
                .is_some_and(|formation| formation.contains(&registration.game_id));

            repo.create(&registration.game_id, battle.id, attended)
                .await?;
            written += 1;
        }

        Ok(written)
    }

    /// Aggregates a member's full attendance history.
    ///
    /// The rate is `100 * attended / total` rendered with two decimals, and
    /// `"0.00"` when the member has no records. Entries are listed in
    /// chronological battle order, each with the team the member fought in
    /// (absent when they were registered but never placed).
    pub async fn user_summary(
        &self,
        user: &entity::user::Model,
    ) -> Result<AttendanceSummaryDto, AppError> {
        let Some(game_id) = user.game_id.as_deref() else {
            return Ok(empty_summary());
        };

        let records = AttendanceRepository::new(self.db)
            .list_by_game_id(game_id)
            .await?;

        let total = records.len() as u64;
        let attended = records.iter().filter(|r| r.attended).count() as u64;

        let battle_ids: Vec<i32> = records.iter().map(|r| r.battle_id).collect();
        let battles: HashMap<i32, Battle> = BattleRepository::new(self.db)
            .find_by_ids(battle_ids)
            .await?
            .into_iter()
            .map(|battle| (battle.id, battle))
            .collect();

        let mut entries: Vec<AttendanceEntryDto> = records
            .iter()
            .filter_map(|record| {
                battles.get(&record.battle_id).map(|battle| AttendanceEntryDto {
                    date: battle.date,
                    battle_label: battle.label(),
                    team: battle
                        .formation
                        .as_ref()
                        .and_then(|formation| formation.team_of(game_id)),
                    attended: record.attended,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.date);

        Ok(AttendanceSummaryDto {
            stats: AttendanceStatsDto {
                attended,
                absent: total - attended,
                rate: format_rate(attended, total),
            },
            records: entries,
        })
    }
}

fn empty_summary() -> AttendanceSummaryDto {
    AttendanceSummaryDto {
        stats: AttendanceStatsDto {
            attended: 0,
            absent: 0,
            rate: format_rate(0, 0),
        },
        records: Vec::new(),
    }
}

/// Attendance percentage with two decimals; `"0.00"` when there is no history.
fn format_rate(attended: u64, total: u64) -> String {
    if total == 0 {
        return "0.00".to_string();
    }

    format!("{:.2}", attended as f64 / total as f64 * 100.0)
}
