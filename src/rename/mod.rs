mod name_builder;
mod to_canonical;
mod types;

pub use name_builder::compose;
pub use to_canonical::{execute_plan, rename_to_canonical, RenameError, RenameOptions};
pub use types::{RenameFailure, RenameOperation, RenameResult};
