//! Per-file review of the proposed names.
//!
//! Files are reviewed one at a time, in input order.

mod prompt;

pub use prompt::PromptReviewer;

use crate::parser::MediaFile;
use crate::progress::Progress;
use crate::resolver::{apply_decision, resolve_best_match, ReviewDecision};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

/// Decides what happens to one file given its automatic proposal
pub trait Reviewer {
    fn review(
        &mut self,
        file: &MediaFile,
        proposal: Option<&str>,
    ) -> Result<ReviewDecision, ReviewError>;
}

/// Non-interactive reviewer: keeps every proposal, skips files without one
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoReviewer;

impl Reviewer for AutoReviewer {
    fn review(
        &mut self,
        _file: &MediaFile,
        proposal: Option<&str>,
    ) -> Result<ReviewDecision, ReviewError> {
        Ok(match proposal {
            Some(_) => ReviewDecision::Accept,
            None => ReviewDecision::Skip,
        })
    }
}

/// Resolve and review every file, setting `chosen_name`
pub fn review_all<R: Reviewer + ?Sized>(
    files: &mut [MediaFile],
    reviewer: &mut R,
    progress: &mut Progress,
) -> Result<(), ReviewError> {
    progress.review_start(files.len());

    for file in files.iter_mut() {
        let proposal = resolve_best_match(file);
        let decision = reviewer.review(file, proposal.as_deref())?;

        file.chosen_name = apply_decision(file, proposal.as_deref(), &decision);

        debug!(
            original = %file.original,
            decision = decision.description(),
            chosen = ?file.chosen_name,
            "Reviewed file"
        );

        if file.chosen_name.is_none() {
            progress.skipped(&file.original);
        }
    }

    info!(
        "{} of {} files have a new name",
        files.iter().filter(|f| f.chosen_name.is_some()).count(),
        files.len()
    );

    Ok(())
}
