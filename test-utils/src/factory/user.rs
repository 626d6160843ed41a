//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .game_id("warrior01")
///     .job("鐵衣")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    game_id: Option<String>,
    job: Option<String>,
    admin: bool,
    on_leave: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric string
    /// - name: `"User {id}"`
    /// - game_id: `None` (setup not completed)
    /// - job: `None`
    /// - admin: `false`
    /// - on_leave: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: format!("{}", 100000000000000000u64 + id),
            name: format!("User {}", id),
            game_id: None,
            job: None,
            admin: false,
            on_leave: false,
        }
    }

    /// Sets the Discord ID for the user.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the in-game ID for the user.
    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    /// Sets the job archetype for the user.
    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Sets the admin status for the user.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the leave flag for the user.
    pub fn on_leave(mut self, on_leave: bool) -> Self {
        self.on_leave = on_leave;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            game_id: ActiveValue::Set(self.game_id),
            job: ActiveValue::Set(self.job),
            admin: ActiveValue::Set(self.admin),
            on_leave: ActiveValue::Set(self.on_leave),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values and no completed setup.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a member with a unique game ID and a default job.
///
/// The member has completed setup and can register for battles.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    let id = next_id();
    UserFactory::new(db)
        .game_id(format!("player{}", id))
        .job("鐵衣")
        .build()
        .await
}

/// Creates an admin member with a unique game ID and a default job.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    let id = next_id();
    UserFactory::new(db)
        .game_id(format!("admin{}", id))
        .job("神相")
        .admin(true)
        .build()
        .await
}
