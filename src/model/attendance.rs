use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregated attendance numbers for one member.
#[derive(Serialize, Clone)]
pub struct AttendanceStatsDto {
    pub attended: u64,
    pub absent: u64,
    /// Percentage with two decimals, e.g. `"75.00"`; `"0.00"` with no records.
    pub rate: String,
}

/// One historical battle outcome in the member's attendance view.
#[derive(Serialize, Clone)]
pub struct AttendanceEntryDto {
    pub date: DateTime<Utc>,
    pub battle_label: String,
    /// Team the member fought in, absent when they were not placed.
    pub team: Option<String>,
    pub attended: bool,
}

/// Payload of `GET /api/attendance/user`.
#[derive(Serialize)]
pub struct AttendanceSummaryDto {
    pub stats: AttendanceStatsDto,
    pub records: Vec<AttendanceEntryDto>,
}
