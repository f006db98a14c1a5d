//! The dialogue controller: sequences catalog checks, parsing, validation
//! and submission across the two-phase conversation.

use std::sync::Arc;

use tracing::debug;

use super::{Responder, reply};
use crate::Result;
use crate::allocation::{BatchOutcome, parse_allocations, validate_batch};
use crate::catalog::Catalog;
use crate::session::{ChatId, Phase, Session, SessionStore};
use crate::submit::AllocationSubmitter;

/// Drives one user's form-filling dialogue from first contact to submission.
///
/// The machine per chat identity: no session (idle) → awaiting employee →
/// awaiting allocations → submit → no session again. It is cyclic; the same
/// identity can file any number of batches over time. All validation
/// failures keep the session in its current phase so the user can retry
/// without starting over.
pub struct DialogueController {
    store: SessionStore,
    catalog: Arc<Catalog>,
    submitter: Arc<dyn AllocationSubmitter>,
    responder: Arc<dyn Responder>,
}

impl DialogueController {
    pub fn new(
        catalog: Arc<Catalog>,
        submitter: Arc<dyn AllocationSubmitter>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        Self {
            store: SessionStore::new(),
            catalog,
            submitter,
            responder,
        }
    }

    /// `/start`: drop any in-progress session and greet from scratch.
    pub async fn handle_start(&self, chat: ChatId) -> Result<()> {
        self.store.remove(chat).await;
        self.responder.send(chat, reply::greeting()).await
    }

    /// `/help`: usage text, session untouched.
    pub async fn handle_help(&self, chat: ChatId) -> Result<()> {
        self.responder.send(chat, reply::help_text()).await
    }

    /// `/cancel`: drop the session. A no-op when there is none; the
    /// acknowledgement is sent either way.
    pub async fn handle_cancel(&self, chat: ChatId) -> Result<()> {
        self.store.remove(chat).await;
        self.responder.send(chat, reply::cancelled()).await
    }

    /// Any non-command text, routed by the session's phase. First contact
    /// creates the session and treats the text as an employee name.
    pub async fn handle_text(&self, chat: ChatId, text: &str) -> Result<()> {
        let session = self.store.get(chat).await.unwrap_or_default();

        match session.phase.clone() {
            Phase::AwaitingEmployee => self.identify_employee(chat, session, text).await,
            Phase::AwaitingAllocations { employee } => {
                self.collect_allocations(chat, session, &employee, text).await
            }
        }
    }

    async fn identify_employee(
        &self,
        chat: ChatId,
        mut session: Session,
        text: &str,
    ) -> Result<()> {
        let name = text.trim();

        if !self.catalog.is_valid_employee(name) {
            // Keep (or establish) the session so the retry stays in phase
            self.store.insert(chat, session).await;
            return self.responder.send(chat, reply::unknown_employee(name)).await;
        }

        debug!(chat, employee = name, "employee identified");
        session.phase = Phase::AwaitingAllocations {
            employee: name.to_string(),
        };
        self.store.insert(chat, session).await;
        self.responder.send(chat, reply::allocations_prompt(name)).await
    }

    async fn collect_allocations(
        &self,
        chat: ChatId,
        mut session: Session,
        employee: &str,
        text: &str,
    ) -> Result<()> {
        let pairs = parse_allocations(text);
        if pairs.is_empty() {
            return self.responder.send(chat, reply::invalid_format()).await;
        }

        match validate_batch(&pairs, &self.catalog) {
            BatchOutcome::OverBudget { total } => {
                self.responder.send(chat, reply::over_budget(total)).await
            }
            BatchOutcome::Rejected { errors } => {
                self.responder.send(chat, reply::pair_errors(&errors)).await
            }
            BatchOutcome::NoneValid => self.responder.send(chat, reply::none_parsed()).await,
            BatchOutcome::Accepted { allocations, total } => {
                session.allocations = allocations;
                self.store.insert(chat, session.clone()).await;

                // The summary goes out before the blocking submission calls
                self.responder
                    .send(chat, reply::confirmation(employee, &session.allocations, total))
                    .await?;

                let report = self
                    .submitter
                    .submit(employee, &session.allocations)
                    .await;

                // The session ends with the attempt, whatever the tally
                self.store.remove(chat).await;
                debug!(
                    chat,
                    succeeded = report.succeeded,
                    failed = report.failed,
                    "batch submitted, session closed"
                );

                let summary = if report.is_complete() {
                    reply::all_submitted(report.succeeded)
                } else {
                    reply::partially_submitted(report)
                };
                self.responder.send(chat, summary).await
            }
        }
    }
}
