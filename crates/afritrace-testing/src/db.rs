//! `sea_orm::MockDatabase` shortcuts for router tests.

use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

/// A Postgres-flavoured mock to append query/exec results to.
pub fn postgres() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

/// A connection that must not be queried (requests rejected before the database).
pub fn unused_connection() -> DatabaseConnection {
    postgres().into_connection()
}

/// Exec result of an UPDATE/DELETE touching `rows` rows.
pub fn rows_affected(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}
