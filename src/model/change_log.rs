use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/change-logs`. All filters are optional and
/// combine conjunctively; `date` matches entries within that civil day.
#[derive(Deserialize)]
pub struct ChangeLogQuery {
    pub date: Option<NaiveDate>,
    pub actor: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct ChangeLogEntryDto {
    pub actor: String,
    pub message: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload of `GET /api/change-logs`, newest first.
#[derive(Serialize)]
pub struct ChangeLogListDto {
    pub logs: Vec<ChangeLogEntryDto>,
}
