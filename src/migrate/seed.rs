//! Seeds the allergy reference table from the built-in catalog before a
//! migration run. Idempotent: matching is by exact description string.

use rusqlite::Connection;
use tracing::info;

use super::catalog::ALLERGY_CATALOG;
use super::MigrationError;
use crate::db::repository::{allergy_exists, insert_allergy};
use crate::models::Allergy;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Insert every catalog term that is not already present. Each term is
/// checked and inserted individually, so catalog duplicates and reruns
/// both land as skips rather than errors.
pub fn seed_allergies(conn: &Connection) -> Result<SeedReport, MigrationError> {
    let mut report = SeedReport::default();
    for term in ALLERGY_CATALOG {
        if allergy_exists(conn, term)? {
            report.skipped += 1;
            continue;
        }
        let allergy = Allergy::new(term)?;
        insert_allergy(conn, &allergy)?;
        report.inserted += 1;
    }
    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "allergy reference data seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::count_allergies;
    use crate::db::sqlite::open_memory_database;
    use std::collections::HashSet;

    #[test]
    fn first_run_inserts_every_distinct_term() {
        let conn = open_memory_database().unwrap();
        let report = seed_allergies(&conn).unwrap();

        let distinct: HashSet<&str> = ALLERGY_CATALOG.iter().copied().collect();
        assert_eq!(report.inserted, distinct.len());
        assert_eq!(
            report.inserted + report.skipped,
            ALLERGY_CATALOG.len(),
            "in-catalog duplicates count as skips"
        );
        assert_eq!(count_allergies(&conn).unwrap(), distinct.len() as i64);
    }

    #[test]
    fn second_run_inserts_nothing() {
        let conn = open_memory_database().unwrap();
        seed_allergies(&conn).unwrap();
        let before = count_allergies(&conn).unwrap();

        let report = seed_allergies(&conn).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, ALLERGY_CATALOG.len());
        assert_eq!(count_allergies(&conn).unwrap(), before);
    }

    #[test]
    fn matching_is_exact_not_normalized() {
        let conn = open_memory_database().unwrap();
        seed_allergies(&conn).unwrap();

        // "Penicillin" in the catalog must not swallow a differently cased
        // pre-existing row.
        let custom = Allergy::new("PENICILLIN-V").unwrap();
        insert_allergy(&conn, &custom).unwrap();
        assert!(allergy_exists(&conn, "PENICILLIN-V").unwrap());
        assert!(!allergy_exists(&conn, "penicillin-v").unwrap());
    }
}
