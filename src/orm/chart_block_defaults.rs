//! SeaORM Entity for chart_block_defaults table

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// Template row copied into every new department's dashboard.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chart_block_defaults")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub slug: String,
    pub dataset: String,
    #[sea_orm(nullable)]
    pub chart_type: Option<String>,
    pub display_order: i32,
}

impl Model {
    /// Materialize this template as an unsaved chart block. The caller is
    /// responsible for assigning the department and inserting it.
    pub fn make_real_block(&self) -> super::chart_blocks::ActiveModel {
        super::chart_blocks::ActiveModel {
            title: Set(self.title.clone()),
            caption: Set(self.caption.clone()),
            slug: Set(self.slug.clone()),
            dataset: Set(self.dataset.clone()),
            chart_type: Set(self.chart_type.clone()),
            display_order: Set(self.display_order),
            date_updated: Set(None),
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
