//! SeaORM Entity for extractors table
//!
//! One row per automated extractor account. The row shares its primary key
//! with the owning users row, so a user either has an extractor profile or
//! does not.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "extractors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Month the next extraction run should start from.
    #[sea_orm(nullable)]
    pub next_month: Option<i32>,
    /// Year the next extraction run should start from.
    #[sea_orm(nullable)]
    pub next_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Id",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
