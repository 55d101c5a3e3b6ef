use serde::Serialize;
use std::path::PathBuf;

/// A single rename operation
#[derive(Debug, Clone, Serialize)]
pub struct RenameOperation {
    /// Full path to the source file
    pub source_path: PathBuf,
    /// Original file name
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// New file name
    pub destination_name: String,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
        }
    }
}

/// A rename that could not be carried out
#[derive(Debug, Clone, Serialize)]
pub struct RenameFailure {
    pub source_name: String,
    pub destination_name: String,
    pub reason: String,
}

/// Outcome of a rename batch
#[derive(Debug, Clone, Serialize)]
pub struct RenameResult {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Renames performed or planned
    pub operations: Vec<RenameOperation>,
    /// Files left alone by choice
    pub skipped: Vec<String>,
    /// Files whose chosen name is already their current name
    pub unchanged: Vec<String>,
    pub failures: Vec<RenameFailure>,
}

impl RenameResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            operations: Vec::new(),
            skipped: Vec::new(),
            unchanged: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn add_failure(&mut self, op: &RenameOperation, reason: impl Into<String>) {
        self.failures.push(RenameFailure {
            source_name: op.source_name.clone(),
            destination_name: op.destination_name.clone(),
            reason: reason.into(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}
