//! SeaORM Entity for chart_blocks table
//!
//! A chart block is one configured visualization slot on a department's
//! public dashboard, instantiated from chart_block_defaults.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chart_blocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub slug: String,
    /// Dataset the block visualizes, e.g. "Use of Force".
    pub dataset: String,
    #[sea_orm(nullable)]
    pub chart_type: Option<String>,
    pub display_order: i32,
    #[sea_orm(nullable)]
    pub date_updated: Option<chrono::NaiveDateTime>,
    #[sea_orm(nullable)]
    pub department_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
