//! Battle lifecycle state machine.
//!
//! States advance strictly forward: `open → closed → published → confirmed`.
//! There is no regression; reopening means creating a new battle. Transitions
//! are compare-and-set at the storage level, and the single-open invariant is
//! additionally backed by a partial unique index, so two admins racing the
//! same action cannot both succeed.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{battle::BattleRepository, is_unique_violation},
    error::AppError,
    model::{
        battle::{Battle, BattleStatus},
        change_log::LogCategory,
    },
    service::{
        attendance::AttendanceService,
        change_log::{actor_id, ChangeLogService},
    },
};

#[cfg(test)]
mod test;

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new battle for registration.
    ///
    /// Fails when another battle is still open: checked here for a friendly
    /// message, and enforced again by the partial unique index for the race
    /// where two admins open simultaneously.
    ///
    /// # Arguments
    /// - `actor` - Admin performing the action
    /// - `date` - When the battle takes place
    /// - `deadline` - Registration cutoff, must not be after the battle date
    /// - `groups` - Group labels for this battle
    ///
    /// # Returns
    /// - `Ok(Battle)` - The newly opened battle
    /// - `Err(AppError::Validation)` - Deadline after the battle date
    /// - `Err(AppError::Conflict)` - Another battle is already open
    pub async fn open(
        &self,
        actor: &entity::user::Model,
        date: DateTime<Utc>,
        deadline: DateTime<Utc>,
        groups: Vec<String>,
    ) -> Result<Battle, AppError> {
        if deadline > date {
            return Err(AppError::Validation(
                "Registration deadline must not be after the battle date".to_string(),
            ));
        }
        if groups.is_empty() {
            return Err(AppError::Validation(
                "A battle needs at least one group".to_string(),
            ));
        }

        let repo = BattleRepository::new(self.db);

        if repo.find_open().await?.is_some() {
            return Err(AppError::Conflict(
                "Another battle is already open for registration".to_string(),
            ));
        }

        let battle = repo
            .create(date, deadline, groups)
            .await
            .map_err(|err| match err {
                AppError::DbErr(db_err) if is_unique_violation(&db_err) => AppError::Conflict(
                    "Another battle is already open for registration".to_string(),
                ),
                other => other,
            })?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!(
                    "Opened battle on {} with registration deadline {}",
                    battle.date.format("%Y-%m-%d %H:%M"),
                    battle.deadline.format("%Y-%m-%d %H:%M")
                ),
                LogCategory::Battle,
            )
            .await;

        Ok(battle)
    }

    /// Closes an open battle; registration endpoints reject the battle from
    /// here on.
    pub async fn close(
        &self,
        actor: &entity::user::Model,
        battle_id: i32,
    ) -> Result<Battle, AppError> {
        let battle = self
            .advance(battle_id, BattleStatus::Open, BattleStatus::Closed)
            .await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!("Closed battle on {}", battle.date.format("%Y-%m-%d")),
                LogCategory::Battle,
            )
            .await;

        Ok(battle)
    }

    /// Publishes a closed battle, exposing the formation read-only to members.
    ///
    /// An unpopulated formation is valid but meaningless; publishing does not
    /// require one.
    pub async fn publish(
        &self,
        actor: &entity::user::Model,
        battle_id: i32,
    ) -> Result<Battle, AppError> {
        let battle = self
            .advance(battle_id, BattleStatus::Closed, BattleStatus::Published)
            .await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!(
                    "Published formation for battle on {}",
                    battle.date.format("%Y-%m-%d")
                ),
                LogCategory::Formation,
            )
            .await;

        Ok(battle)
    }

    /// Confirms a published battle and records attendance.
    ///
    /// The status moves to `confirmed` first; only the request that wins that
    /// compare-and-set runs the attendance fan-out, so records are written at
    /// most once per battle. The recorder itself additionally skips pairs that
    /// already exist, making a retry after a partial failure safe.
    pub async fn confirm(
        &self,
        actor: &entity::user::Model,
        battle_id: i32,
    ) -> Result<Battle, AppError> {
        let battle = self
            .advance(battle_id, BattleStatus::Published, BattleStatus::Confirmed)
            .await?;

        let recorded = AttendanceService::new(self.db).record(&battle).await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!(
                    "Confirmed battle on {} and recorded attendance for {} members",
                    battle.date.format("%Y-%m-%d"),
                    recorded
                ),
                LogCategory::Formation,
            )
            .await;

        Ok(battle)
    }

    /// Resolves the battle currently being managed: the open one, or the
    /// latest unconfirmed one. Called once at the request boundary; every
    /// other operation takes the resolved battle ID explicitly.
    pub async fn current(&self) -> Result<Option<Battle>, AppError> {
        BattleRepository::new(self.db).find_current().await
    }

    /// Resolves the battle currently open for registration, if any.
    pub async fn open_battle(&self) -> Result<Option<Battle>, AppError> {
        BattleRepository::new(self.db).find_open().await
    }

    /// Performs one lifecycle transition with a compare-and-set update.
    async fn advance(
        &self,
        battle_id: i32,
        from: BattleStatus,
        to: BattleStatus,
    ) -> Result<Battle, AppError> {
        let repo = BattleRepository::new(self.db);

        let battle = repo
            .find_by_id(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))?;

        if battle.status != from {
            return Err(AppError::Conflict(format!(
                "Battle is {}, expected {}",
                battle.status, from
            )));
        }

        let advanced = repo.advance_status(battle_id, from, to).await?;
        if !advanced {
            // Someone else advanced the battle between our read and the update.
            return Err(AppError::Conflict(format!(
                "Battle is no longer {}",
                from
            )));
        }

        repo.find_by_id(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))
    }
}
