use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/registration/proxy`.
#[derive(Deserialize)]
pub struct ProxyRegisterRequest {
    pub target_id: String,
    pub reason: String,
}

/// Payload of `GET /api/registration/status`.
#[derive(Serialize)]
pub struct RegistrationStatusDto {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alternate: Option<bool>,
}

/// One sign-up row in the admin list, joined with the member's current job.
#[derive(Serialize, Clone)]
pub struct RegistrationEntryDto {
    pub game_id: String,
    pub job: String,
    pub is_proxy: bool,
    pub is_alternate: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload of `GET /api/registration/list`.
#[derive(Serialize)]
pub struct RegistrationListDto {
    pub players: Vec<RegistrationEntryDto>,
}
