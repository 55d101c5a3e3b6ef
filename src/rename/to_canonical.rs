use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::parser::{parse_file_name, MediaFile};
use crate::progress::Progress;
use crate::review::{review_all, ReviewError, Reviewer};
use crate::scanner::MediaEntry;
use crate::search::{collect_results, TitleSearch};

use super::types::{RenameOperation, RenameResult};

/// Reasons a single file cannot be renamed
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Destination already exists: {0}")]
    DestinationExists(String),

    #[error("Another file in this batch is renamed to {0}")]
    DuplicateDestination(String),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Options for a rename batch
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
}

/// Rename media files to their canonical title.
///
/// Parses every entry, searches all titles, reviews each file in order and
/// finally applies the renames. Only a review failure stops the batch.
pub fn rename_to_canonical<S, R>(
    target_dir: &Path,
    entries: &[MediaEntry],
    searcher: &S,
    reviewer: &mut R,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameResult, ReviewError>
where
    S: TitleSearch + Sync + ?Sized,
    R: Reviewer + ?Sized,
{
    let mut files: Vec<MediaFile> = entries.iter().map(|e| parse_file_name(&e.name)).collect();

    info!("Preparing to rename {} files", files.len());

    collect_results(&mut files, searcher, progress);
    review_all(&mut files, reviewer, progress)?;

    Ok(execute_plan(target_dir, &files, options, progress))
}

/// Apply the chosen names. Failures are recorded per file and never stop
/// the remaining renames.
pub fn execute_plan(
    target_dir: &Path,
    files: &[MediaFile],
    options: &RenameOptions,
    progress: &mut Progress,
) -> RenameResult {
    let mut result = RenameResult::new(options.dry_run);
    let mut claimed: HashSet<&str> = HashSet::new();

    let total = files
        .iter()
        .filter(|f| matches!(&f.chosen_name, Some(name) if *name != f.original))
        .count();
    let mut current = 0;

    for file in files {
        let destination = match &file.chosen_name {
            Some(name) => name,
            None => {
                result.skipped.push(file.original.clone());
                continue;
            }
        };

        if *destination == file.original {
            debug!("Already named correctly: {}", file.original);
            result.unchanged.push(file.original.clone());
            continue;
        }

        current += 1;
        let op = RenameOperation::new(target_dir.join(&file.original), destination.clone());

        let outcome = if !claimed.insert(destination.as_str()) {
            Err(RenameError::DuplicateDestination(destination.clone()))
        } else if op.destination_path.exists() {
            Err(RenameError::DestinationExists(destination.clone()))
        } else if options.dry_run {
            Ok(())
        } else {
            execute_rename(&op)
        };

        match outcome {
            Ok(()) => {
                progress.rename_progress(current, total, &op.source_name, &op.destination_name);
                result.add_operation(op);
            }
            Err(e) => {
                warn!("Rename failed for {}: {}", op.source_name, e);
                progress.warn(&format!("{}: {}", op.source_name, e));
                result.add_failure(&op, e.to_string());
            }
        }
    }

    if !options.dry_run {
        info!(
            "Renamed {} files, {} failed",
            result.len(),
            result.failures.len()
        );
    }

    progress.rename_complete(result.len(), result.failures.len(), options.dry_run);

    result
}

fn execute_rename(op: &RenameOperation) -> Result<(), RenameError> {
    info!("Renaming: {} -> {}", op.source_name, op.destination_name);

    fs::rename(&op.source_path, &op.destination_path).map_err(|e| RenameError::FilesystemError {
        from: op.source_name.clone(),
        to: op.destination_name.clone(),
        source: e,
    })
}
