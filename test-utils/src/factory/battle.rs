//! Battle factory for creating test battle entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test battles with customizable fields.
///
/// Defaults describe a battle one week out with a deadline two days before
/// the event, in the `open` status.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::battle::BattleFactory;
///
/// let battle = BattleFactory::new(&db)
///     .status("closed")
///     .groups(vec!["1", "2"])
///     .build()
///     .await?;
/// ```
pub struct BattleFactory<'a> {
    db: &'a DatabaseConnection,
    date: chrono::DateTime<Utc>,
    deadline: chrono::DateTime<Utc>,
    status: String,
    groups: Vec<String>,
    formation: Option<serde_json::Value>,
}

impl<'a> BattleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            date: now + Duration::days(7),
            deadline: now + Duration::days(5),
            status: "open".to_string(),
            groups: vec!["1".to_string(), "2".to_string()],
            formation: None,
        }
    }

    /// Sets the event date.
    pub fn date(mut self, date: chrono::DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the registration deadline.
    pub fn deadline(mut self, deadline: chrono::DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the per-battle group labels.
    pub fn groups(mut self, groups: Vec<impl Into<String>>) -> Self {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a raw formation payload.
    pub fn formation(mut self, formation: serde_json::Value) -> Self {
        self.formation = Some(formation);
        self
    }

    /// Builds and inserts the battle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::battle::Model)` - Created battle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::battle::Model, DbErr> {
        entity::battle::ActiveModel {
            date: ActiveValue::Set(self.date),
            deadline: ActiveValue::Set(self.deadline),
            status: ActiveValue::Set(self.status),
            groups: ActiveValue::Set(serde_json::json!(self.groups)),
            formation: ActiveValue::Set(self.formation),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open battle with default values.
pub async fn create_open_battle(db: &DatabaseConnection) -> Result<entity::battle::Model, DbErr> {
    BattleFactory::new(db).build().await
}

/// Creates a battle in the given lifecycle status.
pub async fn create_battle_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::battle::Model, DbErr> {
    BattleFactory::new(db).status(status).build().await
}
