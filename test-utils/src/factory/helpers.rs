//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open battle together with one registered member.
///
/// This is a convenience method that creates:
/// 1. A member with completed setup (game ID and job)
/// 2. An open battle with a future deadline
/// 3. A registration joining the two
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, battle, registration))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registered_member(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::battle::Model,
        entity::registration::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_member(db).await?;
    let battle = crate::factory::battle::create_open_battle(db).await?;
    let registration = crate::factory::registration::create_registration(
        db,
        user.game_id.as_deref().unwrap(),
        battle.id,
    )
    .await?;

    Ok((user, battle, registration))
}
