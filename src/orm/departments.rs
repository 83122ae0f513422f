//! SeaORM Entity for departments table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique display name, max 80 characters.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invite_codes::Entity")]
    InviteCodes,
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::use_of_force_incidents::Entity")]
    UseOfForceIncidents,
    #[sea_orm(has_many = "super::chart_blocks::Entity")]
    ChartBlocks,
}

impl Related<super::invite_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InviteCodes.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::use_of_force_incidents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UseOfForceIncidents.def()
    }
}

impl Related<super::chart_blocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChartBlocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
