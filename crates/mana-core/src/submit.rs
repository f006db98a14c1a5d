//! Submission-side contracts shared between the dialogue and the dispatcher.

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Department answer sent with every record.
///
/// The form requires the field but the bot serves a single office, so the
/// value is fixed. A real employee-to-department mapping was never wired up.
pub const DEPARTMENT: &str = "Проектный офис";

/// The four answers posted to the form for one allocation.
///
/// Ephemeral: built right before the outbound call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub department: String,
    pub employee: String,
    pub project: String,
    pub score: String,
}

impl SubmissionRecord {
    pub fn new(employee: &str, project: &str, score: u8) -> Self {
        Self {
            department: DEPARTMENT.to_string(),
            employee: employee.to_string(),
            project: project.to_string(),
            score: score.to_string(),
        }
    }
}

/// Aggregate outcome of one batch of submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl SubmissionReport {
    /// How many outbound calls were attempted in total.
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when every record went through.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Sends one validated batch to the form backend.
///
/// Implemented by the submission crate; the dialogue layer only sees this
/// trait. Partial failure is an accepted outcome and is encoded in the
/// report, not raised as an error.
#[async_trait]
pub trait AllocationSubmitter: Send + Sync {
    async fn submit(&self, employee: &str, allocations: &BTreeMap<String, u8>) -> SubmissionReport;
}
