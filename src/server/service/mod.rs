//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the roster's rules: the
//! battle lifecycle state machine, registration policy, formation assignment
//! constraints, attendance derivation, and the audit trail. Controllers call
//! services with an explicit battle ID resolved once at the boundary; services
//! never query for "the current battle" themselves.

pub mod attendance;
pub mod auth;
pub mod battle;
pub mod change_log;
pub mod formation;
pub mod leave;
pub mod member;
pub mod registration;
pub mod user;
