use serde::{Deserialize, Serialize};

/// Profile of the authenticated user, returned by `GET /api/user/current`.
#[derive(Serialize, Deserialize, Clone)]
pub struct CurrentUserDto {
    pub discord_id: String,
    pub name: String,
    pub game_id: Option<String>,
    pub job: Option<String>,
    pub admin: bool,
    pub on_leave: bool,
    /// True once the user has picked a game ID and a job.
    pub setup_complete: bool,
}

/// First-time profile setup: assigns the in-game ID and job.
#[derive(Deserialize)]
pub struct SetupRequest {
    pub game_id: String,
    pub job: String,
}

#[derive(Deserialize)]
pub struct ChangeJobRequest {
    pub job: String,
}

#[derive(Deserialize)]
pub struct ChangeGameIdRequest {
    pub game_id: String,
}

/// Leave submission for a single civil date.
#[derive(Deserialize)]
pub struct SubmitLeaveRequest {
    pub date: chrono::NaiveDate,
}
