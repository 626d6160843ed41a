//! SeaORM entity models for the roster database.

pub mod attendance_record;
pub mod battle;
pub mod change_log;
pub mod leave_request;
pub mod registration;
pub mod user;

pub mod prelude {
    pub use super::attendance_record::Entity as AttendanceRecord;
    pub use super::battle::Entity as Battle;
    pub use super::change_log::Entity as ChangeLog;
    pub use super::leave_request::Entity as LeaveRequest;
    pub use super::registration::Entity as Registration;
    pub use super::user::Entity as User;
}
