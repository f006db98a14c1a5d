//! Batch validation of parsed allocations.

use std::collections::BTreeMap;

use super::parse::RawAllocation;
use crate::catalog::Catalog;

/// Lowest accepted score for a single project.
pub const MIN_SCORE: i64 = 1;
/// Highest accepted score for a single project.
pub const MAX_SCORE: i64 = 10;
/// The whole batch may not add up to more than this.
pub const MAX_TOTAL_SCORE: i64 = 10;

/// Why one parsed pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairErrorKind {
    /// Score parsed but is outside `[1, 10]`.
    ScoreOutOfRange,
    /// Score text does not parse as an integer.
    NonNumericScore,
    /// Project name is not a catalog member.
    UnknownProject,
}

/// A rejected pair together with the project name the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairError {
    pub project: String,
    pub kind: PairErrorKind,
}

/// Result of validating one message as a self-contained batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every pair is valid and the budget holds.
    Accepted {
        allocations: BTreeMap<String, u8>,
        total: u8,
    },
    /// The valid pairs alone already exceed the budget. Reported before any
    /// per-pair errors.
    OverBudget { total: i64 },
    /// At least one pair was rejected; nothing is submitted.
    Rejected { errors: Vec<PairError> },
    /// Pairs were parsed but none survived validation.
    NoneValid,
}

/// Validates parsed pairs against the catalog and the budget constraint.
///
/// Pairs are checked independently and errors accumulate; one bad pair does
/// not abort the others. Valid pairs land in a map keyed by project name,
/// so a duplicate project overwrites the earlier score. The total is
/// computed once over the final map, after per-pair filtering.
///
/// Outcome precedence is fixed: budget overflow first, then per-pair
/// errors, then emptiness. Callers must not reorder the checks.
pub fn validate_batch(pairs: &[RawAllocation], catalog: &Catalog) -> BatchOutcome {
    let mut allocations: BTreeMap<String, u8> = BTreeMap::new();
    let mut errors = Vec::new();

    for pair in pairs {
        let score = match pair.score.parse::<i64>() {
            Ok(score) if (MIN_SCORE..=MAX_SCORE).contains(&score) => score as u8,
            Ok(_) => {
                errors.push(PairError {
                    project: pair.project.clone(),
                    kind: PairErrorKind::ScoreOutOfRange,
                });
                continue;
            }
            Err(_) => {
                errors.push(PairError {
                    project: pair.project.clone(),
                    kind: PairErrorKind::NonNumericScore,
                });
                continue;
            }
        };

        if !catalog.is_valid_project(&pair.project) {
            errors.push(PairError {
                project: pair.project.clone(),
                kind: PairErrorKind::UnknownProject,
            });
            continue;
        }

        allocations.insert(pair.project.clone(), score);
    }

    let total: i64 = allocations.values().map(|score| i64::from(*score)).sum();

    if total > MAX_TOTAL_SCORE {
        return BatchOutcome::OverBudget { total };
    }
    if !errors.is_empty() {
        return BatchOutcome::Rejected { errors };
    }
    if allocations.is_empty() {
        return BatchOutcome::NoneValid;
    }

    BatchOutcome::Accepted {
        allocations,
        total: total as u8,
    }
}
