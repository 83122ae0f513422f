//! Extractor accounts.
//!
//! An extractor is a per-department automated agent that pushes incident
//! data into the site. Creating one provisions a user, its extractor
//! profile, and the `extractor` role in a single transaction, and hands
//! back the environment text the agent is configured with.

use crate::app_config;
use crate::orm::{departments, extractors, roles, user_roles, users};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::PasswordHasher;
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, TransactionTrait};

pub static EXTRACTOR_ROLE: &str = "extractor";

/// Every extractor account gets the same placeholder address; the account
/// is never contacted by email.
static EXTRACTOR_EMAIL: &str = "extractor@example.com";

/// Derive the account username from the department name.
pub fn extractor_username(department_name: &str) -> String {
    format!("{}-extractor", department_name.replace(' ', "_"))
}

/// Render the connection environment for an extractor agent.
///
/// The password is embedded in plaintext: the output is handed to the
/// operator configuring the agent, and this is the only time the plaintext
/// is available. The four SQL-server variables are left for the operator
/// to fill in.
pub fn generate_envs(user: &users::Model, password: &str) -> String {
    let department_id = user
        .department_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    format!(
        concat!(
            "COMPORT_BASE_URL=\"{}\"\n",
            "COMPORT_USERNAME=\"{}\"\n",
            "COMPORT_PASSWORD=\"{}\"\n",
            "COMPORT_DEPARTMENT_ID=\"{}\"\n",
            "COMPORT_SQL_SERVER_URL =\n",
            "COMPORT_SQL_SERVER_DATABASE =\n",
            "COMPORT_SQL_SERVER_USERNAME =\n",
            "COMPORT_SQL_SERVER_PASSWORD =\n",
        ),
        app_config::site().base_url,
        user.username,
        password,
        department_id,
    )
}

/// Create the extractor account for a department.
///
/// Inserts the user (Argon2-hashed password), the extractor profile row,
/// and the role link in one transaction; any failure rolls back all three
/// writes. Username collisions are rejected by the storage layer's unique
/// constraint, not pre-checked here.
pub async fn create_for_department(
    db: &DatabaseConnection,
    department: &departments::Model,
    password: &str,
) -> Result<(users::Model, extractors::Model, String), DbErr> {
    let password_hash = crate::session::get_argon2()
        .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
        .map_err(|e| DbErr::Custom(format!("Password hashing failed: {}", e)))?
        .to_string();

    let txn = db.begin().await?;

    let user = users::ActiveModel {
        username: Set(extractor_username(&department.name)),
        email: Set(Some(EXTRACTOR_EMAIL.to_owned())),
        password: Set(password_hash),
        password_cipher: Set(users::Cipher::Argon2id),
        active: Set(true),
        department_id: Set(Some(department.id)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let profile = extractors::ActiveModel {
        id: Set(user.id),
        next_month: Set(None),
        next_year: Set(None),
    }
    .insert(&txn)
    .await?;

    let role = match roles::Entity::find()
        .filter(roles::Column::Name.eq(EXTRACTOR_ROLE))
        .one(&txn)
        .await?
    {
        Some(role) => role,
        None => {
            roles::ActiveModel {
                name: Set(EXTRACTOR_ROLE.to_owned()),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    user_roles::ActiveModel {
        user_id: Set(user.id),
        role_id: Set(role.id),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    log::info!(
        "Created extractor {} for department {}",
        user.username,
        department.id
    );

    let envs = generate_envs(&user, password);
    Ok((user, profile, envs))
}
