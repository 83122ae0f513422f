//! Department aggregate: creation, dashboard block queries, and the public
//! use-of-force CSV export.

use crate::orm::{chart_block_defaults, chart_blocks, departments, use_of_force_incidents, users};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, TransactionTrait};
use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

/// Dataset tag on chart blocks backed by use-of-force data.
pub static UOF_DATASET: &str = "Use of Force";

/// Fixed header of the public use-of-force export. Column order is a
/// published contract; `use_of_force_incidents::Model::to_csv_row` must
/// stay in sync with it.
pub static UOF_CSV_HEADER: &str = "id,occuredDate,division,precinct,shift,beat,disposition,censusTract,officerForceType,residentResistType,officerWeaponUsed,residentWeaponUsed,serviceType,arrestMade,arrestCharges,residentInjured,residentHospitalized,officerInjured,officerHospitalized,useOfForceReason,residentRace,officerRace,officerIdentifier";

#[derive(Debug, Deserialize, Validate)]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
}

/// Create a department and seed its dashboard with one chart block per
/// chart_block_defaults row, atomically.
///
/// Name uniqueness is left to the storage layer; a duplicate name surfaces
/// as the insert's `DbErr`.
pub async fn create_department(
    db: &DatabaseConnection,
    form: &NewDepartment,
) -> Result<departments::Model, DbErr> {
    form.validate()
        .map_err(|e| DbErr::Custom(format!("Invalid department: {}", e)))?;

    let txn = db.begin().await?;

    let department = departments::ActiveModel {
        name: Set(form.name.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let defaults = chart_block_defaults::Entity::find().all(&txn).await?;
    let block_count = defaults.len();
    for default_block in defaults {
        let mut block = default_block.make_real_block();
        block.department_id = Set(Some(department.id));
        block.insert(&txn).await?;
    }

    txn.commit().await?;

    log::info!(
        "Created department {} (id: {}) with {} default blocks",
        department.name,
        department.id,
        block_count
    );

    Ok(department)
}

/// Map of slug to chart block for this department's use-of-force dataset.
/// Duplicate slugs collapse last-wins under map insertion.
pub async fn get_uof_blocks(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<HashMap<String, chart_blocks::Model>, DbErr> {
    let blocks = chart_blocks::Entity::find()
        .filter(chart_blocks::Column::DepartmentId.eq(department_id))
        .filter(chart_blocks::Column::Dataset.eq(UOF_DATASET))
        .all(db)
        .await?;

    Ok(blocks
        .into_iter()
        .map(|block| (block.slug.clone(), block))
        .collect())
}

/// First department user carrying an extractor profile, in id order, or
/// `None`. At-most-one extractor per department is not enforced here.
pub async fn get_extractor(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::DepartmentId.eq(department_id))
        .join(JoinType::InnerJoin, users::Relation::Extractor.def())
        .order_by_asc(users::Column::Id)
        .one(db)
        .await
}

/// Full use-of-force CSV document for a department: fixed header plus one
/// row per incident in primary-key order. Zero incidents yields the header
/// line alone.
pub async fn get_uof_csv(db: &DatabaseConnection, department_id: i32) -> Result<String, DbErr> {
    let incidents = use_of_force_incidents::Entity::find()
        .filter(use_of_force_incidents::Column::DepartmentId.eq(department_id))
        .order_by_asc(use_of_force_incidents::Column::Id)
        .all(db)
        .await?;

    let mut csv = format!("{}\n", UOF_CSV_HEADER);
    for incident in incidents {
        csv.push_str(&incident.to_csv_row());
    }
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_23_columns() {
        assert_eq!(UOF_CSV_HEADER.split(',').count(), 23);
        assert!(UOF_CSV_HEADER.starts_with("id,occuredDate,"));
        assert!(UOF_CSV_HEADER.ends_with(",officerIdentifier"));
    }

    #[test]
    fn new_department_name_is_validated() {
        let empty = NewDepartment {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = NewDepartment {
            name: "x".repeat(81),
        };
        assert!(too_long.validate().is_err());

        let ok = NewDepartment {
            name: "River City".to_owned(),
        };
        assert!(ok.validate().is_ok());
    }
}
