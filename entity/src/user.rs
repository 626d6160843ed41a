//! Guild member identity and profile.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Discord snowflake, stored as text.
    #[sea_orm(unique)]
    pub discord_id: String,

    /// Discord display name at last login.
    pub name: String,

    /// In-game ID, assigned once during setup. Null until setup completes.
    #[sea_orm(unique)]
    pub game_id: Option<String>,

    /// Job archetype from the configured roster. Null until setup completes.
    pub job: Option<String>,

    pub admin: bool,

    pub on_leave: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
