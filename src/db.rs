//! Global database connection pool.

use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect to the database and store the pool for the process lifetime.
/// Panics if the connection fails or if called twice.
pub async fn init_db(database_url: String) {
    let pool = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database.");
    DB_POOL
        .set(pool)
        .expect("init_db() may only be called once.");
}

pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL.get().expect("init_db() has not been called.")
}
