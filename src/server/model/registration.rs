//! Registration parameter types.

/// Parameters for inserting a registration row.
///
/// Built by the registration service after all policy checks have passed;
/// the repository performs no validation of its own beyond the storage-level
/// uniqueness constraint.
pub struct CreateRegistrationParam {
    pub game_id: String,
    pub battle_id: i32,
    /// Job snapshot taken from the member's profile at sign-up time.
    pub job: String,
    pub is_proxy: bool,
    pub proxy_by: Option<String>,
    pub proxy_reason: Option<String>,
    pub is_alternate: bool,
}
