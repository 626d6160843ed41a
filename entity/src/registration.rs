//! Per-battle sign-up, one row per (game_id, battle).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub game_id: String,

    pub battle_id: i32,

    /// Job snapshot taken at sign-up time.
    pub job: String,

    /// Whether this sign-up was submitted on behalf of the member.
    pub is_proxy: bool,

    /// Game ID of the acting member for proxy sign-ups.
    pub proxy_by: Option<String>,

    pub proxy_reason: Option<String>,

    /// Accepted after the deadline, held in reserve.
    pub is_alternate: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::battle::Entity",
        from = "Column::BattleId",
        to = "super::battle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Battle,
}

impl Related<super::battle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Battle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
