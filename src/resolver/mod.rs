mod types;

pub use types::ReviewDecision;

use crate::parser::{MediaFile, MEDIA_EXTENSION};
use crate::rename::compose;
use crate::sanitize::sanitize_title;
use tracing::{debug, trace};

/// Index of the candidate picked automatically.
///
/// The earliest candidate containing the file's year wins; without a year,
/// or when no candidate contains it, the first candidate is used. Returns
/// `None` when there are no candidates.
pub fn best_match_index(file: &MediaFile) -> Option<usize> {
    if file.results.is_empty() {
        return None;
    }

    let index = file
        .year
        .as_deref()
        .and_then(|year| file.results.iter().position(|r| r.contains(year)))
        .unwrap_or(0);

    trace!(original = %file.original, index, "Best match index");

    Some(index)
}

/// Propose a final name for `file` from its search candidates
pub fn resolve_best_match(file: &MediaFile) -> Option<String> {
    let index = best_match_index(file)?;
    let proposal = compose(&file.results[index], file);

    debug!(original = %file.original, proposal = %proposal, "Automatic match");

    Some(proposal)
}

/// Build a final name from a title picked or typed by a human.
///
/// An empty title still yields a tags-only name. Returns `None` only when
/// neither a title nor any tag is left, which would name the file `.mkv`.
pub fn compose_with_base(file: &MediaFile, base_title: &str) -> Option<String> {
    let name = compose(&sanitize_title(base_title), file);
    if name == MEDIA_EXTENSION {
        return None;
    }

    Some(name)
}

/// Turn a review decision into the file's final name
pub fn apply_decision(
    file: &MediaFile,
    proposal: Option<&str>,
    decision: &ReviewDecision,
) -> Option<String> {
    match decision {
        ReviewDecision::Accept => proposal.map(str::to_string),
        ReviewDecision::Choose(index) => file
            .results
            .get(*index)
            .and_then(|base| compose_with_base(file, base)),
        ReviewDecision::ManualEntry(text) => compose_with_base(file, text),
        ReviewDecision::Skip => None,
    }
}
