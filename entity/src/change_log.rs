//! Append-only audit trail of mutating actions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "change_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Game ID (or Discord name before setup) of the acting user.
    pub actor: String,

    pub message: String,

    /// Category tag, e.g. 'register', 'battle', 'formation'.
    pub category: String,

    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
