//! Registration factory for creating test sign-up entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: String,
    battle_id: i32,
    job: String,
    is_proxy: bool,
    proxy_by: Option<String>,
    proxy_reason: Option<String>,
    is_alternate: bool,
}

impl<'a> RegistrationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, game_id: impl Into<String>, battle_id: i32) -> Self {
        Self {
            db,
            game_id: game_id.into(),
            battle_id,
            job: "鐵衣".to_string(),
            is_proxy: false,
            proxy_by: None,
            proxy_reason: None,
            is_alternate: false,
        }
    }

    /// Sets the job snapshot.
    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = job.into();
        self
    }

    /// Marks the registration as proxy-created.
    pub fn proxy(mut self, by: impl Into<String>, reason: impl Into<String>) -> Self {
        self.is_proxy = true;
        self.proxy_by = Some(by.into());
        self.proxy_reason = Some(reason.into());
        self
    }

    /// Sets the alternate flag.
    pub fn alternate(mut self, is_alternate: bool) -> Self {
        self.is_alternate = is_alternate;
        self
    }

    /// Builds and inserts the registration entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created registration entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            battle_id: ActiveValue::Set(self.battle_id),
            job: ActiveValue::Set(self.job),
            is_proxy: ActiveValue::Set(self.is_proxy),
            proxy_by: ActiveValue::Set(self.proxy_by),
            proxy_reason: ActiveValue::Set(self.proxy_reason),
            is_alternate: ActiveValue::Set(self.is_alternate),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration with default values.
pub async fn create_registration(
    db: &DatabaseConnection,
    game_id: &str,
    battle_id: i32,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db, game_id, battle_id).build().await
}
