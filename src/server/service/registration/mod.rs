//! Registration ledger operations.
//!
//! Sign-ups are accepted only against an open battle. The deadline is checked
//! independently of the status: a sign-up after the deadline while the battle
//! is still nominally open is accepted as an alternate rather than rejected.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::registration::RegistrationEntryDto,
    server::{
        config::RosterConfig,
        data::{
            battle::BattleRepository, is_unique_violation, leave_request::LeaveRequestRepository,
            registration::RegistrationRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            battle::{Battle, BattleStatus},
            change_log::LogCategory,
            registration::CreateRegistrationParam,
        },
        service::change_log::{actor_id, ChangeLogService},
    },
};

#[cfg(test)]
mod test;

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the user for a battle.
    ///
    /// # Arguments
    /// - `user` - The member signing up; must have completed setup
    /// - `battle_id` - Target battle, resolved by the caller
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registration, flagged alternate when the
    ///   deadline had already passed
    /// - `Err(AppError::Validation)` - Profile setup incomplete
    /// - `Err(AppError::Conflict)` - Battle not open, or already registered
    /// - `Err(AppError::Policy)` - Member is on leave for the battle date
    pub async fn register(
        &self,
        user: &entity::user::Model,
        battle_id: i32,
    ) -> Result<entity::registration::Model, AppError> {
        let (game_id, job) = require_setup(user)?;

        let battle = self.load_open_battle(battle_id).await?;
        self.check_not_on_leave(user, &battle).await?;

        let registration = self
            .insert(CreateRegistrationParam {
                game_id: game_id.to_string(),
                battle_id,
                job: job.to_string(),
                is_proxy: false,
                proxy_by: None,
                proxy_reason: None,
                is_alternate: battle.deadline_passed(Utc::now()),
            })
            .await?;

        let note = if registration.is_alternate {
            " as alternate (deadline passed)"
        } else {
            ""
        };
        ChangeLogService::new(self.db)
            .append(
                game_id,
                format!(
                    "Registered for battle on {}{}",
                    battle.date.format("%Y-%m-%d"),
                    note
                ),
                LogCategory::Register,
            )
            .await;

        Ok(registration)
    }

    /// Cancels the user's registration for a battle.
    ///
    /// # Returns
    /// - `Ok(())` - The registration was removed
    /// - `Err(AppError::NotFound)` - No registration for the pair
    pub async fn cancel(
        &self,
        user: &entity::user::Model,
        battle_id: i32,
    ) -> Result<(), AppError> {
        let (game_id, _) = require_setup(user)?;

        let repo = RegistrationRepository::new(self.db);
        let deleted = repo.delete_by_pair(game_id, battle_id).await?;

        if !deleted {
            return Err(AppError::NotFound(
                "No registration found for this battle".to_string(),
            ));
        }

        ChangeLogService::new(self.db)
            .append(
                game_id,
                "Cancelled battle registration".to_string(),
                LogCategory::Cancel,
            )
            .await;

        Ok(())
    }

    /// Registers another member for a battle on their behalf.
    ///
    /// Subject to the same rules as [`register`](Self::register), evaluated
    /// against the target member. A non-empty reason is required, and the
    /// acting member is recorded on the row. Whether non-admins may act is a
    /// roster policy switch.
    pub async fn proxy_register(
        &self,
        actor: &entity::user::Model,
        target_game_id: &str,
        battle_id: i32,
        reason: &str,
        roster: &RosterConfig,
    ) -> Result<entity::registration::Model, AppError> {
        if reason.trim().is_empty() {
            return Err(AppError::Validation(
                "A reason is required for proxy registration".to_string(),
            ));
        }
        if !actor.admin && !roster.allow_member_proxy {
            return Err(AppError::Policy(
                "Proxy registration is limited to admins".to_string(),
            ));
        }

        let target = UserRepository::new(self.db)
            .find_by_game_id(target_game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Target member not found".to_string()))?;
        let (game_id, job) = require_setup(&target)?;

        let battle = self.load_open_battle(battle_id).await?;
        self.check_not_on_leave(&target, &battle).await?;

        let registration = self
            .insert(CreateRegistrationParam {
                game_id: game_id.to_string(),
                battle_id,
                job: job.to_string(),
                is_proxy: true,
                proxy_by: Some(actor_id(actor).to_string()),
                proxy_reason: Some(reason.trim().to_string()),
                is_alternate: battle.deadline_passed(Utc::now()),
            })
            .await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!(
                    "Registered {} for battle on {} by proxy: {}",
                    game_id,
                    battle.date.format("%Y-%m-%d"),
                    reason.trim()
                ),
                LogCategory::Register,
            )
            .await;

        Ok(registration)
    }

    /// The user's registration for a battle, if any.
    pub async fn status(
        &self,
        user: &entity::user::Model,
        battle_id: i32,
    ) -> Result<Option<entity::registration::Model>, AppError> {
        let Some(game_id) = user.game_id.as_deref() else {
            return Ok(None);
        };

        let repo = RegistrationRepository::new(self.db);
        Ok(repo.find_by_pair(game_id, battle_id).await?)
    }

    /// All sign-ups for a battle, joined with each member's current job for
    /// display. Falls back to the job snapshot when the member is gone.
    pub async fn list(&self, battle_id: i32) -> Result<Vec<RegistrationEntryDto>, AppError> {
        let repo = RegistrationRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let rows = repo.list_by_battle(battle_id).await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let current_job = user_repo
                .find_by_game_id(&row.game_id)
                .await?
                .and_then(|user| user.job);

            entries.push(RegistrationEntryDto {
                job: current_job.unwrap_or_else(|| row.job.clone()),
                game_id: row.game_id,
                is_proxy: row.is_proxy,
                is_alternate: row.is_alternate,
                created_at: row.created_at,
            });
        }

        Ok(entries)
    }

    /// Loads the battle and requires it to still be open for registration.
    async fn load_open_battle(&self, battle_id: i32) -> Result<Battle, AppError> {
        let battle = BattleRepository::new(self.db)
            .find_by_id(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))?;

        if battle.status != BattleStatus::Open {
            return Err(AppError::Conflict(
                "Registration is closed for this battle".to_string(),
            ));
        }

        Ok(battle)
    }

    /// Rejects the sign-up when the member is flagged on leave or has filed
    /// leave for the battle date.
    async fn check_not_on_leave(
        &self,
        user: &entity::user::Model,
        battle: &Battle,
    ) -> Result<(), AppError> {
        if user.on_leave {
            return Err(AppError::Policy(
                "Member is currently on leave".to_string(),
            ));
        }

        if let Some(game_id) = user.game_id.as_deref() {
            let blocked = LeaveRequestRepository::new(self.db)
                .blocks_date(game_id, battle.date.date_naive())
                .await?;
            if blocked {
                return Err(AppError::Policy(
                    "Member has filed leave for the battle date".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Inserts the row, translating an existence check race into the same
    /// conflict the check itself produces.
    async fn insert(
        &self,
        param: CreateRegistrationParam,
    ) -> Result<entity::registration::Model, AppError> {
        let repo = RegistrationRepository::new(self.db);

        if repo
            .find_by_pair(&param.game_id, param.battle_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already registered for this battle".to_string(),
            ));
        }

        repo.create(param).await.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("Already registered for this battle".to_string())
            } else {
                err.into()
            }
        })
    }
}

/// Requires the member to have completed profile setup.
fn require_setup(user: &entity::user::Model) -> Result<(&str, &str), AppError> {
    match (user.game_id.as_deref(), user.job.as_deref()) {
        (Some(game_id), Some(job)) => Ok((game_id, job)),
        _ => Err(AppError::Validation(
            "Complete profile setup before registering".to_string(),
        )),
    }
}
