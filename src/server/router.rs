use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        attendance, auth, battle, change_log, formation, leave, member, registration, user,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/user/current", get(user::current))
        .route("/api/user/setup", post(user::setup))
        .route("/api/user/change-job", post(user::change_job))
        .route("/api/user/change-id", post(user::change_game_id))
        .route("/api/battle/open", post(battle::open))
        .route("/api/battle/close", post(battle::close))
        .route("/api/battle/current", get(battle::current))
        .route("/api/registration/register", post(registration::register))
        .route("/api/registration/cancel", post(registration::cancel))
        .route("/api/registration/proxy", post(registration::proxy))
        .route("/api/registration/status", get(registration::status))
        .route("/api/registration/list", get(registration::list))
        .route("/api/formation/save", post(formation::save))
        .route("/api/formation/read", get(formation::read))
        .route("/api/formation/publish", post(formation::publish))
        .route("/api/formation/confirm", post(formation::confirm))
        .route("/api/leave/submit", post(leave::submit))
        .route("/api/attendance/user", get(attendance::user_summary))
        .route("/api/members/list", get(member::list))
        .route("/api/members/toggle-leave", post(member::toggle_leave))
        .route("/api/members/toggle-admin", post(member::toggle_admin))
        .route("/api/members/delete", post(member::delete))
        .route("/api/stats", get(member::stats))
        .route("/api/change-logs", get(change_log::query))
}
