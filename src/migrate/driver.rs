//! The page loop: fetch, transform, persist, accumulate. One bad record
//! never stops the run; a dead source does.

use rusqlite::Connection;
use tracing::{error, info, warn};

use super::report::RunReport;
use super::transform::{transform, TransformContext};
use crate::db::repository::{insert_patient, patient_exists_by_external_id};
use crate::legacy::{LegacyMedication, LegacySource};
use crate::models::{FacilityDirectory, Patient, PatientLookup};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("patient already exists in the target store")]
    AlreadyExists,

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Destination for fully assembled patient aggregates.
pub trait PatientSink {
    fn insert(&mut self, patient: &Patient) -> Result<(), SinkError>;
}

/// Sink backed by the target SQLite store. Re-running a migration against
/// the same store skips records already linked via their external id.
pub struct SqlitePatientSink<'a> {
    pub conn: &'a Connection,
}

impl PatientSink for SqlitePatientSink<'_> {
    fn insert(&mut self, patient: &Patient) -> Result<(), SinkError> {
        for external_id in &patient.external_ids {
            let exists =
                patient_exists_by_external_id(self.conn, &external_id.value, external_id.system)
                    .map_err(|e| SinkError::Storage(e.to_string()))?;
            if exists {
                return Err(SinkError::AlreadyExists);
            }
        }
        insert_patient(self.conn, patient).map_err(|e| SinkError::Storage(e.to_string()))
    }
}

pub struct MigrationOptions {
    pub page_size: u32,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Drives a full migration run against a source, a sink and the two
/// lookup seams.
pub struct MigrationRunner<'a> {
    pub source: &'a dyn LegacySource,
    pub sink: &'a mut dyn PatientSink,
    pub lookup: &'a dyn PatientLookup,
    pub facilities: &'a dyn FacilityDirectory,
    pub options: MigrationOptions,
}

impl MigrationRunner<'_> {
    /// Walk the source page by page until it runs dry. Every record either
    /// lands in the sink or in the failure list; nothing is silently
    /// dropped. Id mappings merge into the report only after the owning
    /// patient persisted.
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::default();
        let ctx = TransformContext {
            lookup: self.lookup,
            facilities: self.facilities,
        };

        let mut page_number: u32 = 1;
        loop {
            info!(page_number, page_size = self.options.page_size, "fetching page");
            let page = match self.source.fetch_page(self.options.page_size, page_number) {
                Ok(page) => page,
                Err(e) => {
                    error!(page_number, error = %e, "aborting run, source failed");
                    report.aborted = Some(e.to_string());
                    break;
                }
            };
            if page.patients.is_empty() {
                break;
            }

            for legacy in &page.patients {
                report.processed += 1;
                let medications: Vec<&LegacyMedication> = page
                    .patient_medications
                    .iter()
                    .filter(|m| m.patient_id_ref == legacy.patient_id)
                    .collect();

                let transformed = match transform(&ctx, legacy, &medications) {
                    Ok(t) => t,
                    Err(e) => {
                        warn!(patient_id = legacy.patient_id, error = %e, "record failed");
                        report.record_failure(legacy.patient_id, e.to_string());
                        continue;
                    }
                };

                match self.sink.insert(&transformed.patient) {
                    Ok(()) => {
                        report.migrated += 1;
                        report.medication_ids.extend(transformed.medication_ids);
                        report.admin_hour_ids.extend(transformed.admin_hour_ids);
                    }
                    Err(e) => {
                        warn!(patient_id = legacy.patient_id, error = %e, "record failed");
                        report.record_failure(legacy.patient_id, e.to_string());
                    }
                }
            }

            page_number += 1;
        }

        info!(
            processed = report.processed,
            migrated = report.migrated,
            failed = report.failures.len(),
            "migration run finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::count_allergies;
    use crate::db::sqlite::open_memory_database;
    use crate::legacy::{
        LegacyAddress, LegacyAdminHour, LegacyPage, LegacyPatient, SourceError,
    };
    use crate::models::patient::test_support::KnownFacilities;
    use rusqlite::params;

    enum Step {
        Page(LegacyPage),
        Fail(String),
    }

    /// Source serving a scripted sequence of pages, then empties forever.
    struct ScriptedSource {
        steps: std::cell::RefCell<Vec<Step>>,
    }

    impl ScriptedSource {
        fn new(steps: Vec<Step>) -> Self {
            Self {
                steps: std::cell::RefCell::new(steps),
            }
        }
    }

    impl LegacySource for ScriptedSource {
        fn fetch_page(&self, _page_size: u32, _page_number: u32) -> Result<LegacyPage, SourceError> {
            let mut steps = self.steps.borrow_mut();
            if steps.is_empty() {
                return Ok(LegacyPage::default());
            }
            match steps.remove(0) {
                Step::Page(page) => Ok(page),
                Step::Fail(reason) => Err(SourceError::Connection(reason)),
            }
        }
    }

    fn legacy_patient(id: i64, fname: &str) -> LegacyPatient {
        LegacyPatient {
            patient_id: id,
            fname: Some(fname.into()),
            lname: Some("Delgado".into()),
            dob: Some("1948-06-02".into()),
            gender: Some("Female".into()),
            patient_status: Some("Active".into()),
            patient_addresses: vec![LegacyAddress {
                address: Some(format!("{id} Main St")),
                street: Some("Main St".into()),
                city: Some("Fresno".into()),
                state: Some("CA".into()),
                zip_code: Some("93650".into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn legacy_medication(patient_id: i64, med_id: i64) -> LegacyMedication {
        LegacyMedication {
            patient_medication_id: med_id,
            patient_id_ref: patient_id,
            med_name: Some("Metformin".into()),
            directions: Some("BID".into()),
            admin_hours: vec![LegacyAdminHour {
                patient_medication_admin_hour_id: med_id * 10,
                hour: "08:00 AM".into(),
            }],
            ..Default::default()
        }
    }

    fn run_against(conn: &rusqlite::Connection, source: &dyn LegacySource) -> RunReport {
        let lookup = crate::db::repository::SqlitePatientLookup { conn };
        let mut sink = SqlitePatientSink { conn };
        let facilities = KnownFacilities(vec![42]);
        let mut runner = MigrationRunner {
            source,
            sink: &mut sink,
            lookup: &lookup,
            facilities: &facilities,
            options: MigrationOptions::default(),
        };
        runner.run()
    }

    fn patient_count(conn: &rusqlite::Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn migrates_pages_until_source_runs_dry() {
        let conn = open_memory_database().unwrap();
        let source = ScriptedSource::new(vec![
            Step::Page(LegacyPage {
                patients: vec![legacy_patient(1, "Rosa"), legacy_patient(2, "Miguel")],
                patient_medications: vec![legacy_medication(1, 900)],
            }),
            Step::Page(LegacyPage {
                patients: vec![legacy_patient(3, "Elena")],
                patient_medications: vec![],
            }),
        ]);

        let report = run_against(&conn, &source);
        assert_eq!(report.processed, 3);
        assert_eq!(report.migrated, 3);
        assert!(report.failures.is_empty());
        assert!(report.aborted.is_none());
        assert_eq!(patient_count(&conn), 3);
        assert_eq!(report.medication_ids.len(), 1);
        assert_eq!(report.admin_hour_ids.len(), 1);
    }

    #[test]
    fn one_bad_record_does_not_stop_the_run() {
        let conn = open_memory_database().unwrap();
        let mut bad = legacy_patient(2, "Miguel");
        bad.dob = None;
        let source = ScriptedSource::new(vec![Step::Page(LegacyPage {
            patients: vec![legacy_patient(1, "Rosa"), bad, legacy_patient(3, "Elena")],
            patient_medications: vec![],
        })]);

        let report = run_against(&conn, &source);
        assert_eq!(report.processed, 3);
        assert_eq!(report.migrated, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].legacy_id, 2);
        assert_eq!(report.failures[0].reason, "missing birth date");
        assert_eq!(patient_count(&conn), 2);
    }

    #[test]
    fn patient_without_addresses_fails_with_a_named_reason() {
        let conn = open_memory_database().unwrap();
        let mut homeless = legacy_patient(2, "Miguel");
        homeless.patient_addresses.clear();
        let source = ScriptedSource::new(vec![Step::Page(LegacyPage {
            patients: vec![legacy_patient(1, "Rosa"), homeless],
            patient_medications: vec![],
        })]);

        let report = run_against(&conn, &source);
        assert_eq!(report.migrated + report.failures.len(), report.processed);
        assert_eq!(report.migrated, 1);
        assert_eq!(
            report.failures[0].reason,
            "patient must have at least one address"
        );
    }

    #[test]
    fn failure_on_first_page_migrates_nothing() {
        let conn = open_memory_database().unwrap();
        let source = ScriptedSource::new(vec![Step::Fail("export host down".into())]);

        let report = run_against(&conn, &source);
        assert_eq!(report.processed, 0);
        assert_eq!(report.migrated, 0);
        assert!(report.aborted.is_some());
        assert_eq!(patient_count(&conn), 0);
    }

    #[test]
    fn source_failure_aborts_but_keeps_earlier_work() {
        let conn = open_memory_database().unwrap();
        let source = ScriptedSource::new(vec![
            Step::Page(LegacyPage {
                patients: vec![legacy_patient(1, "Rosa")],
                patient_medications: vec![],
            }),
            Step::Fail("export host down".into()),
        ]);

        let report = run_against(&conn, &source);
        assert_eq!(report.migrated, 1);
        assert!(report.aborted.is_some());
        assert_eq!(patient_count(&conn), 1);
    }

    #[test]
    fn second_run_skips_already_migrated_patients() {
        let conn = open_memory_database().unwrap();
        let page = || {
            Step::Page(LegacyPage {
                patients: vec![legacy_patient(1, "Rosa")],
                patient_medications: vec![legacy_medication(1, 900)],
            })
        };

        let first = run_against(&conn, &ScriptedSource::new(vec![page()]));
        assert_eq!(first.migrated, 1);

        let second = run_against(&conn, &ScriptedSource::new(vec![page()]));
        assert_eq!(second.processed, 1);
        assert_eq!(second.migrated, 0);
        assert_eq!(second.failures.len(), 1);
        assert_eq!(
            second.failures[0].reason,
            "patient already exists in the target store"
        );
        assert_eq!(patient_count(&conn), 1);
        assert!(second.medication_ids.is_empty(), "no mappings without an insert");
    }

    #[test]
    fn mappings_only_merge_after_persistence() {
        let conn = open_memory_database().unwrap();
        // Same person twice in one page: the second copy fails the
        // duplicate check, so only the first contributes mappings.
        let source = ScriptedSource::new(vec![Step::Page(LegacyPage {
            patients: vec![legacy_patient(1, "Rosa"), legacy_patient(1, "Rosa")],
            patient_medications: vec![legacy_medication(1, 900)],
        })]);

        let report = run_against(&conn, &source);
        assert_eq!(report.migrated, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.medication_ids.len(), 1);
        assert_eq!(report.admin_hour_ids.len(), 1);
    }

    #[test]
    fn sink_errors_become_failure_reasons() {
        let conn = open_memory_database().unwrap();
        // Pre-link the legacy id so the sink reports a duplicate.
        conn.execute(
            "INSERT INTO patients (id, first_name, last_name, birth_date, gender, status)
             VALUES ('00000000-0000-0000-0000-000000000000', 'X', 'Y', '1900-01-01',
                     'unknown', 'inactive')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO external_ids (value, system, patient_id)
             VALUES ('1', 'legacy', '00000000-0000-0000-0000-000000000000')",
            params![],
        )
        .unwrap();

        let source = ScriptedSource::new(vec![Step::Page(LegacyPage {
            patients: vec![legacy_patient(1, "Rosa")],
            patient_medications: vec![],
        })]);
        let report = run_against(&conn, &source);
        assert_eq!(report.migrated, 0);
        assert_eq!(
            report.failures[0].reason,
            "patient already exists in the target store"
        );
    }

    #[test]
    fn runs_leave_reference_data_alone() {
        let conn = open_memory_database().unwrap();
        let before = count_allergies(&conn).unwrap();
        let source = ScriptedSource::new(vec![Step::Page(LegacyPage {
            patients: vec![legacy_patient(1, "Rosa")],
            patient_medications: vec![],
        })]);
        run_against(&conn, &source);
        assert_eq!(count_allergies(&conn).unwrap(), before);
    }
}
