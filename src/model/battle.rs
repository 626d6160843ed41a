use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Battle as exposed to clients. The formation payload is served separately
/// through the formation endpoints.
#[derive(Serialize, Clone)]
pub struct BattleDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub status: String,
    pub groups: Vec<String>,
}

/// Payload of `GET /api/battle/current`. `battle` is null when nothing is
/// open or awaiting confirmation.
#[derive(Serialize)]
pub struct CurrentBattleDto {
    pub battle: Option<BattleDto>,
}

/// Body of `POST /api/battle/open`.
#[derive(Deserialize)]
pub struct OpenBattleRequest {
    pub date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    /// Group labels for this battle; defaults to the configured roster groups.
    pub groups: Option<Vec<String>>,
}
