//! Formation assignment engine.
//!
//! Persists the grid assignment for a battle and guarantees that no member
//! occupies two slots. The whole payload is replaced in one write, so the
//! duplicate check is a validation pass over the submission rather than a
//! cross-request lock.

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    model::formation::{Formation, FormationViewDto, PoolPlayerDto},
    server::{
        config::RosterConfig,
        data::{battle::BattleRepository, registration::RegistrationRepository},
        error::AppError,
        model::{
            battle::{Battle, BattleStatus},
            change_log::LogCategory,
        },
        service::change_log::{actor_id, ChangeLogService},
    },
};

#[cfg(test)]
mod test;

pub struct FormationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and saves a formation, replacing the previous payload
    /// wholesale.
    ///
    /// Validation walks the submission in order — groups, then teams, then
    /// job slots — checking every label against the configured roster and the
    /// battle's groups, and rejecting the first member found in a second
    /// slot. Saving is allowed while the battle is open or closed; the
    /// formation is locked once published.
    ///
    /// # Arguments
    /// - `actor` - Admin performing the action
    /// - `battle_id` - Target battle, resolved by the caller
    /// - `formation` - Full assignment payload
    /// - `roster` - Valid job and team identifiers
    ///
    /// # Returns
    /// - `Ok(())` - Formation stored
    /// - `Err(AppError::Validation)` - Unknown group, team, or job label
    /// - `Err(AppError::Conflict)` - A member occupies two slots, or the
    ///   battle is already published
    pub async fn save(
        &self,
        actor: &entity::user::Model,
        battle_id: i32,
        formation: Formation,
        roster: &RosterConfig,
    ) -> Result<(), AppError> {
        let repo = BattleRepository::new(self.db);

        let battle = repo
            .find_by_id(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))?;

        if !matches!(battle.status, BattleStatus::Open | BattleStatus::Closed) {
            return Err(AppError::Conflict(
                "Formation is locked once the battle is published".to_string(),
            ));
        }

        validate_formation(&formation, &battle, roster)?;

        repo.set_formation(battle_id, &formation).await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!(
                    "Saved formation for battle on {}",
                    battle.date.format("%Y-%m-%d")
                ),
                LogCategory::Formation,
            )
            .await;

        Ok(())
    }

    /// Reads the formation for display.
    ///
    /// Admins receive the full payload plus the pool of registered members to
    /// offer as options per slot. Members receive only their own slot, and
    /// only once the battle is published; before that the view carries no
    /// assignment data.
    pub async fn read(
        &self,
        user: &entity::user::Model,
        battle_id: i32,
    ) -> Result<FormationViewDto, AppError> {
        let battle = BattleRepository::new(self.db)
            .find_by_id(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))?;

        if user.admin {
            let pool = self.registered_pool(battle_id).await?;

            return Ok(FormationViewDto {
                status: battle.status.as_str().to_string(),
                groups: Some(battle.groups),
                formation: Some(battle.formation.unwrap_or_default()),
                pool: Some(pool),
                slot: None,
            });
        }

        let visible = matches!(
            battle.status,
            BattleStatus::Published | BattleStatus::Confirmed
        );
        let slot = match (visible, &battle.formation, user.game_id.as_deref()) {
            (true, Some(formation), Some(game_id)) => formation.slot_of(game_id),
            _ => None,
        };

        Ok(FormationViewDto {
            status: battle.status.as_str().to_string(),
            groups: None,
            formation: None,
            pool: None,
            slot,
        })
    }

    /// The battle's sign-ups as slot candidates.
    async fn registered_pool(&self, battle_id: i32) -> Result<Vec<PoolPlayerDto>, AppError> {
        let rows = RegistrationRepository::new(self.db)
            .list_by_battle(battle_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PoolPlayerDto {
                game_id: row.game_id,
                job: row.job,
                is_alternate: row.is_alternate,
            })
            .collect())
    }
}

/// Validates labels and the one-slot-per-member invariant.
///
/// Walks groups, then teams, then slots; the first violation wins.
fn validate_formation(
    formation: &Formation,
    battle: &Battle,
    roster: &RosterConfig,
) -> Result<(), AppError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for group in &formation.groups {
        if !battle.groups.iter().any(|label| *label == group.label) {
            return Err(AppError::Validation(format!(
                "Group '{}' is not configured for this battle",
                group.label
            )));
        }

        for team in &group.teams {
            if !roster.is_valid_team(&team.name) {
                return Err(AppError::Validation(format!(
                    "Unknown team '{}'",
                    team.name
                )));
            }

            for slot in &team.slots {
                if !roster.is_valid_job(&slot.job) {
                    return Err(AppError::Validation(format!("Unknown job '{}'", slot.job)));
                }

                if let Some(game_id) = slot.game_id.as_deref() {
                    if !seen.insert(game_id) {
                        return Err(AppError::Conflict(format!(
                            "Member {} is assigned to more than one slot",
                            game_id
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
