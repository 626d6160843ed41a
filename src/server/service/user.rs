//! Member profile operations: setup, job change, game ID change.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::CurrentUserDto,
    server::{
        config::RosterConfig,
        data::user::UserRepository,
        error::AppError,
        model::change_log::LogCategory,
        service::change_log::{actor_id, ChangeLogService},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Completes first-time profile setup: assigns the in-game ID and job.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(AppError::Validation)` - Bad game ID format or unknown job
    /// - `Err(AppError::Conflict)` - Setup already done, or game ID taken
    pub async fn setup(
        &self,
        user: entity::user::Model,
        game_id: String,
        job: String,
        roster: &RosterConfig,
    ) -> Result<entity::user::Model, AppError> {
        if user.game_id.is_some() {
            return Err(AppError::Conflict(
                "Profile setup has already been completed".to_string(),
            ));
        }
        validate_game_id(&game_id)?;
        validate_job(&job, roster)?;

        let repo = UserRepository::new(self.db);

        if repo.game_id_exists(&game_id).await? {
            return Err(AppError::Conflict("This game ID is already taken".to_string()));
        }

        let user = repo.set_game_id(user, game_id.clone()).await?;
        let user = repo.set_job(user, job.clone()).await?;

        ChangeLogService::new(self.db)
            .append(
                &game_id,
                format!("Completed setup with game ID {} and job {}", game_id, job),
                LogCategory::Other,
            )
            .await;

        Ok(user)
    }

    /// Changes the member's job archetype.
    pub async fn change_job(
        &self,
        user: entity::user::Model,
        job: String,
        roster: &RosterConfig,
    ) -> Result<entity::user::Model, AppError> {
        validate_job(&job, roster)?;

        let old_job = user.job.clone().unwrap_or_else(|| "-".to_string());
        let repo = UserRepository::new(self.db);
        let user = repo.set_job(user, job.clone()).await?;

        ChangeLogService::new(self.db)
            .append(
                actor_id(&user),
                format!("Changed job from {} to {}", old_job, job),
                LogCategory::JobChange,
            )
            .await;

        Ok(user)
    }

    /// Changes the member's in-game ID.
    ///
    /// Historical rows (registrations, attendance) keep the old ID; only the
    /// profile moves.
    pub async fn change_game_id(
        &self,
        user: entity::user::Model,
        game_id: String,
    ) -> Result<entity::user::Model, AppError> {
        let old_id = user.game_id.clone().ok_or_else(|| {
            AppError::Validation("Complete profile setup before changing the game ID".to_string())
        })?;
        validate_game_id(&game_id)?;

        let repo = UserRepository::new(self.db);

        if repo.game_id_exists(&game_id).await? {
            return Err(AppError::Conflict("This game ID is already taken".to_string()));
        }

        let user = repo.set_game_id(user, game_id.clone()).await?;

        ChangeLogService::new(self.db)
            .append(
                &game_id,
                format!("Changed game ID from {} to {}", old_id, game_id),
                LogCategory::IdChange,
            )
            .await;

        Ok(user)
    }
}

/// Converts a user entity to the current-user DTO.
pub fn current_user_dto(user: &entity::user::Model) -> CurrentUserDto {
    CurrentUserDto {
        discord_id: user.discord_id.clone(),
        name: user.name.clone(),
        game_id: user.game_id.clone(),
        job: user.job.clone(),
        admin: user.admin,
        on_leave: user.on_leave,
        setup_complete: user.game_id.is_some() && user.job.is_some(),
    }
}

/// Game IDs are 3-20 alphanumeric characters.
fn validate_game_id(game_id: &str) -> Result<(), AppError> {
    let valid = (3..=20).contains(&game_id.len())
        && game_id.chars().all(|c| c.is_ascii_alphanumeric());

    if !valid {
        return Err(AppError::Validation(
            "Game ID must be 3-20 letters or digits".to_string(),
        ));
    }

    Ok(())
}

fn validate_job(job: &str, roster: &RosterConfig) -> Result<(), AppError> {
    if !roster.is_valid_job(job) {
        return Err(AppError::Validation(format!("Unknown job '{}'", job)));
    }

    Ok(())
}
