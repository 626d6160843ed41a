//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. They provide type-safe
//! representations — most importantly the battle lifecycle status and the
//! parsed formation payload — with business logic separated from database and
//! API concerns.

pub mod battle;
pub mod change_log;
pub mod registration;
