//! SeaORM Entity for use_of_force_incidents table
//!
//! One row per recorded use-of-force event. Rows are exported to the public
//! transparency CSV via [`Model::to_csv_row`].

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "use_of_force_incidents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub department_id: i32,
    /// Record identifier carried over from the department's source system.
    #[sea_orm(nullable)]
    pub opaque_id: Option<String>,
    #[sea_orm(nullable)]
    pub occured_date: Option<chrono::NaiveDateTime>,
    #[sea_orm(nullable)]
    pub division: Option<String>,
    #[sea_orm(nullable)]
    pub precinct: Option<String>,
    #[sea_orm(nullable)]
    pub shift: Option<String>,
    #[sea_orm(nullable)]
    pub beat: Option<String>,
    #[sea_orm(nullable)]
    pub disposition: Option<String>,
    #[sea_orm(nullable)]
    pub census_tract: Option<String>,
    #[sea_orm(nullable)]
    pub officer_force_type: Option<String>,
    #[sea_orm(nullable)]
    pub resident_resist_type: Option<String>,
    #[sea_orm(nullable)]
    pub officer_weapon_used: Option<String>,
    #[sea_orm(nullable)]
    pub resident_weapon_used: Option<String>,
    #[sea_orm(nullable)]
    pub service_type: Option<String>,
    #[sea_orm(nullable)]
    pub arrest_made: Option<bool>,
    #[sea_orm(nullable)]
    pub arrest_charges: Option<String>,
    #[sea_orm(nullable)]
    pub resident_injured: Option<bool>,
    #[sea_orm(nullable)]
    pub resident_hospitalized: Option<bool>,
    #[sea_orm(nullable)]
    pub officer_injured: Option<bool>,
    #[sea_orm(nullable)]
    pub officer_hospitalized: Option<bool>,
    #[sea_orm(nullable)]
    pub use_of_force_reason: Option<String>,
    #[sea_orm(nullable)]
    pub resident_race: Option<String>,
    #[sea_orm(nullable)]
    pub officer_race: Option<String>,
    #[sea_orm(nullable)]
    pub officer_identifier: Option<String>,
}

impl Model {
    /// Render this incident as a single CSV row, newline terminated.
    ///
    /// Column order must match the export header in
    /// [`crate::department::UOF_CSV_HEADER`].
    pub fn to_csv_row(&self) -> String {
        let fields = [
            self.id.to_string(),
            self.occured_date
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            opt_str(&self.division),
            opt_str(&self.precinct),
            opt_str(&self.shift),
            opt_str(&self.beat),
            opt_str(&self.disposition),
            opt_str(&self.census_tract),
            opt_str(&self.officer_force_type),
            opt_str(&self.resident_resist_type),
            opt_str(&self.officer_weapon_used),
            opt_str(&self.resident_weapon_used),
            opt_str(&self.service_type),
            opt_bool(self.arrest_made),
            opt_str(&self.arrest_charges),
            opt_bool(self.resident_injured),
            opt_bool(self.resident_hospitalized),
            opt_bool(self.officer_injured),
            opt_bool(self.officer_hospitalized),
            opt_str(&self.use_of_force_reason),
            opt_str(&self.resident_race),
            opt_str(&self.officer_race),
            opt_str(&self.officer_identifier),
        ];

        let mut row = fields
            .iter()
            .map(|f| escape_csv_field(f))
            .collect::<Vec<_>>()
            .join(",");
        row.push('\n');
        row
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_bool(value: Option<bool>) -> String {
    value.map(|b| b.to_string()).unwrap_or_default()
}

/// Quote a field when it contains a delimiter, quote, or line break.
/// Embedded quotes are doubled per RFC 4180.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
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
