//! Accumulated outcome of one migration run, plus the operator-facing
//! summary printed at the end.

use std::io;

use super::transform::IdMapping;

/// One failed record: the reason text and the legacy id it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    pub reason: String,
    pub legacy_id: i64,
}

/// Failures sharing a reason, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureGroup {
    pub reason: String,
    pub legacy_ids: Vec<i64>,
}

/// Everything a run produces besides the rows in the target store. Id
/// mappings only land here after the corresponding patient persisted.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    pub migrated: usize,
    pub failures: Vec<RecordFailure>,
    pub medication_ids: Vec<IdMapping>,
    pub admin_hour_ids: Vec<IdMapping>,
    /// Set when the run stopped before exhausting the source.
    pub aborted: Option<String>,
}

impl RunReport {
    pub fn record_failure(&mut self, legacy_id: i64, reason: String) {
        self.failures.push(RecordFailure { reason, legacy_id });
    }

    /// Group failures by reason, preserving the order reasons first
    /// appeared in.
    pub fn failure_groups(&self) -> Vec<FailureGroup> {
        let mut groups: Vec<FailureGroup> = Vec::new();
        for failure in &self.failures {
            match groups.iter_mut().find(|g| g.reason == failure.reason) {
                Some(group) => group.legacy_ids.push(failure.legacy_id),
                None => groups.push(FailureGroup {
                    reason: failure.reason.clone(),
                    legacy_ids: vec![failure.legacy_id],
                }),
            }
        }
        groups
    }

    /// Write the end-of-run summary: counts, failures grouped by reason,
    /// then the legacy-to-new id mapping tables for downstream systems.
    pub fn write_summary<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(reason) = &self.aborted {
            writeln!(out, "Run aborted : {reason}")?;
        }
        writeln!(
            out,
            "** {} patients processed : {} patients migrated successfully, \
             {} patients failed with the following reasons **",
            self.processed,
            self.migrated,
            self.failures.len()
        )?;
        for group in self.failure_groups() {
            let ids = group
                .legacy_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            writeln!(
                out,
                "Reason : {}, Count : {}, PatientIds : {}",
                group.reason,
                group.legacy_ids.len(),
                ids
            )?;
        }

        writeln!(out, "** Patient Medication Ids Mapping **")?;
        for mapping in &self.medication_ids {
            writeln!(out, "{},{}", mapping.legacy_id, mapping.new_id)?;
        }
        writeln!(out, "** Admin Hours Ids Mapping **")?;
        for mapping in &self.admin_hour_ids {
            writeln!(out, "{},{}", mapping.legacy_id, mapping.new_id)?;
        }
        Ok(())
    }
}
