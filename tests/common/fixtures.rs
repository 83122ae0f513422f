//! Test fixtures for creating test data
#![allow(dead_code)]
#![allow(clippy::needless_update)]

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use chrono::Utc;
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Insert a department row directly, without the default-block seeding the
/// service layer performs.
pub async fn create_test_department(
    db: &DatabaseConnection,
    name: &str,
) -> Result<comport::orm::departments::Model, DbErr> {
    use comport::orm::departments;

    departments::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a chart block template row.
pub async fn create_default_block(
    db: &DatabaseConnection,
    slug: &str,
    dataset: &str,
    display_order: i32,
) -> Result<comport::orm::chart_block_defaults::Model, DbErr> {
    use comport::orm::chart_block_defaults;

    chart_block_defaults::ActiveModel {
        title: Set(format!("{} chart", slug)),
        caption: Set(Some("A default caption".to_string())),
        slug: Set(slug.to_string()),
        dataset: Set(dataset.to_string()),
        chart_type: Set(Some("bar".to_string())),
        display_order: Set(display_order),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a chart block directly attached to a department.
pub async fn create_chart_block(
    db: &DatabaseConnection,
    department_id: i32,
    slug: &str,
    dataset: &str,
) -> Result<comport::orm::chart_blocks::Model, DbErr> {
    use comport::orm::chart_blocks;

    chart_blocks::ActiveModel {
        title: Set(format!("{} chart", slug)),
        caption: Set(None),
        slug: Set(slug.to_string()),
        dataset: Set(dataset.to_string()),
        chart_type: Set(Some("bar".to_string())),
        display_order: Set(0),
        date_updated: Set(None),
        department_id: Set(Some(department_id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a minimal use-of-force incident for a department.
pub async fn create_test_incident(
    db: &DatabaseConnection,
    department_id: i32,
    officer_identifier: &str,
) -> Result<comport::orm::use_of_force_incidents::Model, DbErr> {
    use comport::orm::use_of_force_incidents;

    use_of_force_incidents::ActiveModel {
        department_id: Set(department_id),
        opaque_id: Set(Some(format!("src-{}", officer_identifier))),
        occured_date: Set(Some(Utc::now().naive_utc())),
        division: Set(Some("North".to_string())),
        precinct: Set(Some("First".to_string())),
        shift: Set(Some("Day".to_string())),
        disposition: Set(Some("Sustained".to_string())),
        officer_force_type: Set(Some("Physical".to_string())),
        service_type: Set(Some("Call for Service".to_string())),
        arrest_made: Set(Some(true)),
        resident_injured: Set(Some(false)),
        officer_injured: Set(Some(false)),
        resident_race: Set(Some("White".to_string())),
        officer_race: Set(Some("White".to_string())),
        officer_identifier: Set(Some(officer_identifier.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert an unused invite code for a department.
pub async fn create_invite_code(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<comport::orm::invite_codes::Model, DbErr> {
    use comport::orm::invite_codes;

    invite_codes::ActiveModel {
        department_id: Set(department_id),
        code: Set(invite_codes::generate_code()),
        used: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a plain (non-extractor) user, optionally attached to a department.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    department_id: Option<i32>,
) -> Result<comport::orm::users::Model, DbErr> {
    use comport::orm::users;

    let password_hash = comport::session::get_argon2()
        .hash_password("password123".as_bytes(), &SaltString::generate(&mut OsRng))
        .map_err(|e| DbErr::Custom(format!("Password hashing failed: {}", e)))?
        .to_string();

    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(Some(format!("{}@test.com", username))),
        password: Set(password_hash),
        password_cipher: Set(users::Cipher::Argon2id),
        active: Set(true),
        department_id: Set(department_id),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
