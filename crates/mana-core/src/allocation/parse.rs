//! Lenient extraction of `project - score` clauses from a message.

use once_cell::sync::Lazy;
use regex::Regex;

/// One extracted clause, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAllocation {
    /// Project name as typed by the user, trimmed of surrounding whitespace.
    pub project: String,
    /// Score digits as typed, not yet parsed.
    pub score: String,
}

// The name fragment cannot contain a comma or a dash, so in a clause like
// "A - B - 5" only the rightmost "B - 5" matches. Known quirk, kept as-is:
// none of the catalog names contain a dash followed by digits.
static CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^-,]+?)\s*-\s*(\d+)").unwrap());

/// Extracts all `name - digits` clauses from a comma-separated line.
///
/// The extraction is best-effort: fragments that do not match the clause
/// shape are skipped silently. An empty result means the message contained
/// no parseable allocation at all, which callers report as its own
/// condition rather than a hard failure.
pub fn parse_allocations(text: &str) -> Vec<RawAllocation> {
    CLAUSE
        .captures_iter(text)
        .map(|caps| RawAllocation {
            project: caps[1].trim().to_string(),
            score: caps[2].to_string(),
        })
        .collect()
}
