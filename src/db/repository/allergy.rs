use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Allergy;

pub fn insert_allergy(conn: &Connection, allergy: &Allergy) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO allergies (id, description) VALUES (?1, ?2)",
        params![allergy.id.to_string(), allergy.description],
    )?;
    Ok(())
}

/// Exact-string existence check; this is the idempotency key for seeding.
pub fn allergy_exists(conn: &Connection, description: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM allergies WHERE description = ?1",
        params![description],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn count_allergies(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM allergies", [], |row| row.get(0))?;
    Ok(count)
}
