//! Admin member-directory operations.

use sea_orm::DatabaseConnection;

use crate::{
    model::member::{GuildStatsDto, MemberDto},
    server::{
        data::{
            attendance::AttendanceRepository, battle::BattleRepository,
            leave_request::LeaveRequestRepository, registration::RegistrationRepository,
            user::UserRepository,
        },
        error::AppError,
        model::change_log::LogCategory,
        service::change_log::{actor_id, ChangeLogService},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists members, optionally filtered by job.
    pub async fn list(&self, job: Option<&str>) -> Result<Vec<MemberDto>, AppError> {
        let users = UserRepository::new(self.db).list(job).await?;

        Ok(users
            .into_iter()
            .map(|user| MemberDto {
                game_id: user.game_id,
                name: user.name,
                job: user.job,
                admin: user.admin,
                on_leave: user.on_leave,
            })
            .collect())
    }

    /// Sets a member's leave flag.
    pub async fn toggle_leave(
        &self,
        actor: &entity::user::Model,
        game_id: &str,
        on_leave: bool,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let member = repo
            .find_by_game_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        repo.set_on_leave(member, on_leave).await?;

        let state = if on_leave { "on leave" } else { "active" };
        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!("Set {} to {}", game_id, state),
                LogCategory::Member,
            )
            .await;

        Ok(())
    }

    /// Sets a member's admin flag.
    pub async fn toggle_admin(
        &self,
        actor: &entity::user::Model,
        game_id: &str,
        admin: bool,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let member = repo
            .find_by_game_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        repo.set_admin(member, admin).await?;

        let state = if admin { "granted" } else { "revoked" };
        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!("Admin {} for {}", state, game_id),
                LogCategory::Member,
            )
            .await;

        Ok(())
    }

    /// Deletes a member and everything keyed to their game ID: registrations,
    /// leave entries, and attendance records.
    pub async fn delete(
        &self,
        actor: &entity::user::Model,
        game_id: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let member = repo
            .find_by_game_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        RegistrationRepository::new(self.db)
            .delete_by_game_id(game_id)
            .await?;
        LeaveRequestRepository::new(self.db)
            .delete_by_game_id(game_id)
            .await?;
        AttendanceRepository::new(self.db)
            .delete_by_game_id(game_id)
            .await?;
        repo.delete(member).await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(actor),
                format!("Deleted member {}", game_id),
                LogCategory::Member,
            )
            .await;

        Ok(())
    }

    /// Headline numbers for the admin dashboard.
    ///
    /// `registered` counts sign-ups for the currently open battle and is 0
    /// when none is open.
    pub async fn stats(&self) -> Result<GuildStatsDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let registered = match BattleRepository::new(self.db).find_open().await? {
            Some(battle) => {
                RegistrationRepository::new(self.db)
                    .count_by_battle(battle.id)
                    .await?
            }
            None => 0,
        };

        Ok(GuildStatsDto {
            total_members: user_repo.count().await?,
            registered,
            on_leave: user_repo.count_on_leave().await?,
        })
    }
}
