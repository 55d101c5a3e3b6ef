mod codes;

pub use codes::ExitCode;

use crate::parser::MEDIA_EXTENSION;
use crate::review::ReviewError;
use crate::scanner::ScannerError;
use crate::search::SearchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("No media files found in {path}")]
    NoMediaFiles { path: PathBuf },

    #[error("Search client error: {0}")]
    SearchSetup(#[from] SearchError),

    #[error("Review aborted: {0}")]
    Review(#[from] ReviewError),

    #[error("{failed} of {total} renames failed")]
    RenamesFailed { failed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::NoMediaFiles { .. } => ExitCode::NoMediaFiles,
            AppError::SearchSetup(_) => ExitCode::SearchError,
            AppError::Review(_) => ExitCode::ReviewError,
            AppError::RenamesFailed { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::NoMediaFiles { path } => {
                format!(
                    "No files to process in:\n  {}\n\n\
                     Only files ending in '{}' are renamed (case-sensitive).",
                    path.display(),
                    MEDIA_EXTENSION
                )
            }

            AppError::SearchSetup(err) => {
                format!(
                    "Could not set up the title search:\n  {}\n\n\
                     Check MOVIE_RENAMER_SEARCH_URL and the selector variables \
                     in your environment or .env file.",
                    err
                )
            }

            AppError::Review(err) => {
                format!(
                    "Review stopped before all files were handled:\n  {}\n\n\
                     No files were renamed. Run with --yes to accept the \
                     automatic matches without prompting.",
                    err
                )
            }

            AppError::RenamesFailed { failed, total } => {
                format!(
                    "{} of {} renames failed. The other files were renamed.\n\n\
                     Check file permissions and ensure no files are open.",
                    failed, total
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}
