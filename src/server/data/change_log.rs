//! Change log data repository.
//!
//! The change log is append-only: this repository exposes insertion and
//! filtered reads, nothing else. There is no update or delete path.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::change_log::LogCategory;

/// Filters for querying the audit trail. All fields are optional and combine
/// conjunctively.
#[derive(Default)]
pub struct ChangeLogFilter {
    /// Matches entries whose timestamp falls within this civil day (UTC).
    pub date: Option<NaiveDate>,
    pub actor: Option<String>,
    pub category: Option<String>,
}

/// Repository providing database operations for the audit trail.
pub struct ChangeLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChangeLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit entry stamped with the current time.
    ///
    /// # Arguments
    /// - `actor` - Game ID (or Discord name before setup) of the acting user
    /// - `message` - Human-readable description of the action
    /// - `category` - Category tag for filtering
    pub async fn append(
        &self,
        actor: &str,
        message: String,
        category: LogCategory,
    ) -> Result<entity::change_log::Model, DbErr> {
        entity::change_log::ActiveModel {
            actor: ActiveValue::Set(actor.to_string()),
            message: ActiveValue::Set(message),
            category: ActiveValue::Set(category.as_str().to_string()),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Queries the audit trail, newest entries first.
    pub async fn query(
        &self,
        filter: ChangeLogFilter,
    ) -> Result<Vec<entity::change_log::Model>, DbErr> {
        let mut query = entity::prelude::ChangeLog::find();

        if let Some(date) = filter.date {
            let start = date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
            let end = start + chrono::Duration::days(1);
            query = query
                .filter(entity::change_log::Column::Timestamp.gte(start))
                .filter(entity::change_log::Column::Timestamp.lt(end));
        }
        if let Some(actor) = filter.actor {
            query = query.filter(entity::change_log::Column::Actor.eq(actor));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::change_log::Column::Category.eq(category));
        }

        query
            .order_by_desc(entity::change_log::Column::Timestamp)
            .all(self.db)
            .await
    }
}
