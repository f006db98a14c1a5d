//! Fan-out of one validated batch to the form sink.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use mana_core::submit::{AllocationSubmitter, SubmissionRecord, SubmissionReport};
use tracing::{error, info};

use crate::sink::FormSink;

/// Sends each allocation as its own form response and tallies the outcomes.
///
/// Deliveries run as independent concurrent calls joined before the tally
/// is reported; a failed or timed-out record never blocks its siblings, and
/// nothing is retried. Exactly one attempt per allocation.
pub struct SubmissionDispatcher {
    sink: Arc<dyn FormSink>,
}

impl SubmissionDispatcher {
    pub fn new(sink: Arc<dyn FormSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl AllocationSubmitter for SubmissionDispatcher {
    async fn submit(&self, employee: &str, allocations: &BTreeMap<String, u8>) -> SubmissionReport {
        let deliveries = allocations.iter().map(|(project, score)| {
            let record = SubmissionRecord::new(employee, project, *score);
            let sink = Arc::clone(&self.sink);

            async move {
                match sink.deliver(&record).await {
                    Ok(()) => {
                        info!(
                            employee = %record.employee,
                            project = %record.project,
                            score = %record.score,
                            "form submitted"
                        );
                        true
                    }
                    Err(err) => {
                        error!(project = %record.project, error = %err, "form submission failed");
                        false
                    }
                }
            }
        });

        let outcomes = join_all(deliveries).await;
        let succeeded = outcomes.iter().filter(|delivered| **delivered).count();

        SubmissionReport {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mana_core::submit::DEPARTMENT;
    use mana_core::{ManaError, Result};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Sink that fails for a configured set of projects and records every
    /// delivery attempt.
    #[derive(Default)]
    struct ScriptedSink {
        failing_projects: HashSet<String>,
        attempts: Mutex<Vec<SubmissionRecord>>,
    }

    impl ScriptedSink {
        fn failing(projects: &[&str]) -> Self {
            Self {
                failing_projects: projects.iter().map(|p| p.to_string()).collect(),
                ..Self::default()
            }
        }

        fn attempts(&self) -> Vec<SubmissionRecord> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FormSink for ScriptedSink {
        async fn deliver(&self, record: &SubmissionRecord) -> Result<()> {
            self.attempts.lock().unwrap().push(record.clone());
            if self.failing_projects.contains(&record.project) {
                return Err(ManaError::delivery("scripted failure"));
            }
            Ok(())
        }
    }

    fn batch(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
        entries
            .iter()
            .map(|(project, score)| (project.to_string(), *score))
            .collect()
    }

    #[tokio::test]
    async fn one_attempt_per_allocation() {
        let sink = Arc::new(ScriptedSink::default());
        let dispatcher = SubmissionDispatcher::new(sink.clone());

        let report = dispatcher
            .submit("Кузнецов Иван", &batch(&[("Chad", 4), ("ВТБ / SMM", 5)]))
            .await;

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(report.attempted(), 2);

        let attempts = sink.attempts();
        assert_eq!(attempts.len(), 2);
        assert!(attempts.iter().all(|r| r.employee == "Кузнецов Иван"));
        assert!(attempts.iter().all(|r| r.department == DEPARTMENT));
    }

    #[tokio::test]
    async fn failures_do_not_halt_siblings() {
        let sink = Arc::new(ScriptedSink::failing(&["Chad"]));
        let dispatcher = SubmissionDispatcher::new(sink.clone());

        let report = dispatcher
            .submit(
                "Кузнецов Иван",
                &batch(&[("Chad", 4), ("ВТБ / SMM", 5), ("Posters", 1)]),
            )
            .await;

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(sink.attempts().len(), 3);
    }

    #[tokio::test]
    async fn all_failures_still_report_exact_counts() {
        let sink = Arc::new(ScriptedSink::failing(&["Chad", "Posters"]));
        let dispatcher = SubmissionDispatcher::new(sink.clone());

        let report = dispatcher
            .submit("Кузнецов Иван", &batch(&[("Chad", 4), ("Posters", 6)]))
            .await;

        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 2);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn empty_batch_attempts_nothing() {
        let sink = Arc::new(ScriptedSink::default());
        let dispatcher = SubmissionDispatcher::new(sink.clone());

        let report = dispatcher.submit("Кузнецов Иван", &BTreeMap::new()).await;

        assert_eq!(report.attempted(), 0);
        assert!(sink.attempts().is_empty());
    }

    #[tokio::test]
    async fn scores_are_rendered_as_text() {
        let sink = Arc::new(ScriptedSink::default());
        let dispatcher = SubmissionDispatcher::new(sink.clone());

        dispatcher
            .submit("Кузнецов Иван", &batch(&[("Chad", 10)]))
            .await;

        assert_eq!(sink.attempts()[0].score, "10");
    }
}
