use serde::{Deserialize, Serialize};

/// One member row in the admin directory listing.
#[derive(Serialize, Clone)]
pub struct MemberDto {
    pub game_id: Option<String>,
    pub name: String,
    pub job: Option<String>,
    pub admin: bool,
    pub on_leave: bool,
}

/// Payload of `GET /api/members/list`.
#[derive(Serialize)]
pub struct MemberListDto {
    pub members: Vec<MemberDto>,
}

/// Query string of `GET /api/members/list`.
#[derive(Deserialize)]
pub struct MemberListQuery {
    pub job: Option<String>,
}

#[derive(Deserialize)]
pub struct ToggleLeaveRequest {
    pub game_id: String,
    pub on_leave: bool,
}

#[derive(Deserialize)]
pub struct ToggleAdminRequest {
    pub game_id: String,
    pub admin: bool,
}

#[derive(Deserialize)]
pub struct DeleteMemberRequest {
    pub game_id: String,
}

/// Headline numbers for the admin dashboard.
#[derive(Serialize)]
pub struct GuildStatsDto {
    pub total_members: u64,
    /// Sign-ups for the currently open battle, 0 when none is open.
    pub registered: u64,
    pub on_leave: u64,
}

/// Payload of `GET /api/stats`.
#[derive(Serialize)]
pub struct StatsDto {
    pub stats: GuildStatsDto,
}
