use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "movie-renamer")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename movie files to their canonical IMDb title")]
pub struct Args {
    /// Directory containing the .mkv files to rename
    #[arg(default_value = ".")]
    pub target_dir: PathBuf,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Accept automatic matches without prompting; files without a match are skipped
    #[arg(short, long)]
    pub yes: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the rename plan as tab-separated lines
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
