//! Session domain model.

use std::collections::BTreeMap;

/// Stable per-user identity supplied by the chat transport.
///
/// The bot talks to people in private chats, so the chat id doubles as the
/// user id.
pub type ChatId = i64;

/// Where a dialogue currently stands.
///
/// `Idle` has no representation here: an idle user simply has no session in
/// the store. Submission and cancellation are transitions, not stored
/// states; both end with the session removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Session exists, employee not yet identified.
    AwaitingEmployee,
    /// Employee identified, waiting for the allocation message.
    AwaitingAllocations { employee: String },
}

/// In-progress dialogue state for one chat identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    /// Validated allocations, keyed by project name. Filled right before
    /// submission; a duplicate project in one message overwrites.
    pub allocations: BTreeMap<String, u8>,
}

impl Session {
    /// A fresh session awaiting the employee name.
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingEmployee,
            allocations: BTreeMap::new(),
        }
    }

    /// The identified employee, if the dialogue got that far.
    pub fn employee(&self) -> Option<&str> {
        match &self.phase {
            Phase::AwaitingEmployee => None,
            Phase::AwaitingAllocations { employee } => Some(employee),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
