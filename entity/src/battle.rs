//! Scheduled guild battle with lifecycle status and formation payload.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// When the battle takes place.
    pub date: DateTimeUtc,

    /// Registration cutoff. Sign-ups after this become alternates.
    pub deadline: DateTimeUtc,

    /// Lifecycle status: 'open', 'closed', 'published' or 'confirmed'.
    pub status: String,

    /// Group labels configured for this battle, as a JSON string array.
    pub groups: Json,

    /// Formation payload. Null until an admin first saves one.
    pub formation: Option<Json>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registration::Entity")]
    Registration,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecord,
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
