//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation at login, profile setup, directory queries, and the admin
//! and leave flags.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user at login time.
    ///
    /// Inserts a new user or updates an existing user's display name and optionally
    /// their admin status. The admin status is only updated when explicitly provided
    /// (`Some` value), preventing accidental removal of admin privileges during
    /// regular login operations.
    ///
    /// # Arguments
    /// - `discord_id` - Discord snowflake of the user
    /// - `name` - Current Discord display name
    /// - `is_admin` - Admin status to apply, or `None` to leave it untouched
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        discord_id: String,
        name: String,
        is_admin: Option<bool>,
    ) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![entity::user::Column::Name];

        if is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id),
            name: ActiveValue::Set(name),
            admin: ActiveValue::Set(is_admin.unwrap_or(false)),
            on_leave: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity)
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their in-game ID.
    pub async fn find_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::GameId.eq(game_id))
            .one(self.db)
            .await
    }

    /// Checks whether an in-game ID is already taken.
    pub async fn game_id_exists(&self, game_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::GameId.eq(game_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the in-game ID of a user.
    ///
    /// Used both for first-time setup and later change requests. Uniqueness is
    /// checked by the caller and enforced again by the unique index.
    pub async fn set_game_id(
        &self,
        user: entity::user::Model,
        game_id: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.game_id = ActiveValue::Set(Some(game_id));
        active.update(self.db).await
    }

    /// Sets the job archetype of a user.
    pub async fn set_job(
        &self,
        user: entity::user::Model,
        job: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.job = ActiveValue::Set(Some(job));
        active.update(self.db).await
    }

    /// Sets the leave flag of a user.
    pub async fn set_on_leave(
        &self,
        user: entity::user::Model,
        on_leave: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.on_leave = ActiveValue::Set(on_leave);
        active.update(self.db).await
    }

    /// Sets the admin flag of a user.
    pub async fn set_admin(
        &self,
        user: entity::user::Model,
        admin: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.admin = ActiveValue::Set(admin);
        active.update(self.db).await
    }

    /// Lists members, optionally filtered by job, ordered by game ID.
    pub async fn list(&self, job: Option<&str>) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(job) = job {
            query = query.filter(entity::user::Column::Job.eq(job));
        }

        query
            .order_by_asc(entity::user::Column::GameId)
            .all(self.db)
            .await
    }

    /// Deletes a user row.
    ///
    /// Registrations, leave requests, and attendance records referencing the
    /// member's game ID are removed by the member service, not here.
    pub async fn delete(&self, user: entity::user::Model) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user.id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts all members.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts members currently flagged as on leave.
    pub async fn count_on_leave(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OnLeave.eq(true))
            .count(self.db)
            .await
    }
}
