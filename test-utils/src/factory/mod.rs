//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_member(&db).await?;
//!     let battle = factory::battle::create_open_battle(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let battle = factory::battle::BattleFactory::new(&db)
//!     .status("closed")
//!     .groups(vec!["1", "2", "3"])
//!     .build()
//!     .await?;
//! ```

pub mod battle;
pub mod helpers;
pub mod leave_request;
pub mod registration;
pub mod user;

pub use battle::{create_battle_with_status, create_open_battle};
pub use leave_request::create_leave_request;
pub use registration::create_registration;
pub use user::{create_admin, create_member, create_user};
