pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod resolver;
pub mod review;
pub mod sanitize;
pub mod scanner;
pub mod search;

pub use error::{AppError, ExitCode};
pub use parser::{parse_file_name, MediaFile, Quality, MEDIA_EXTENSION};
pub use progress::Progress;
pub use rename::{compose, execute_plan, rename_to_canonical, RenameOptions, RenameResult};
pub use resolver::{
    apply_decision, best_match_index, compose_with_base, resolve_best_match, ReviewDecision,
};
pub use review::{AutoReviewer, PromptReviewer, ReviewError, Reviewer};
pub use sanitize::sanitize_title;
pub use scanner::{scan_media_files, MediaEntry, ScannerError};
pub use search::{
    collect_results, config_from_env, ImdbClient, SearchConfig, SearchError, TitleSearch,
};
