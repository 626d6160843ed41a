//! API data transfer objects.
//!
//! This module contains the serializable types exchanged over the HTTP boundary.
//! Request DTOs deserialize JSON bodies and query strings; response DTOs are
//! wrapped in the uniform `{success, message?, ...payload}` envelope from
//! [`api::ApiResponse`]. Domain models are converted to DTOs at the controller
//! boundary.

pub mod api;
pub mod attendance;
pub mod battle;
pub mod change_log;
pub mod formation;
pub mod member;
pub mod registration;
pub mod user;
