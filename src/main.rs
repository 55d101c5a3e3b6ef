use clap::Parser;
use movie_renamer::cli::Args;
use movie_renamer::output::{
    display_dry_run, display_dry_run_simple, display_execution_result, display_json,
};
use movie_renamer::progress::should_use_colors;
use movie_renamer::{
    config_from_env, logging, rename_to_canonical, scan_media_files, AppError, AutoReviewer,
    ImdbClient, Progress, PromptReviewer, RenameOptions, Reviewer,
};
use std::io;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    debug!("Environment loaded, checking search configuration");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let colors_enabled = should_use_colors();
    if !colors_enabled {
        colored::control::set_override(false);
    }

    let mut progress = Progress::new_with_ui(args.verbose > 0, colors_enabled);

    // Step 1: List media files
    let entries = scan_media_files(&args.target_dir)?;
    if entries.is_empty() {
        return Err(AppError::NoMediaFiles {
            path: args.target_dir.clone(),
        });
    }
    progress.scan_complete(entries.len(), &args.target_dir);

    info!("Found {} media files", entries.len());
    for entry in &entries {
        debug!("  {}", entry.name);
    }

    // Step 2: Search, review and rename
    let searcher = ImdbClient::new(config_from_env())?;

    let mut reviewer: Box<dyn Reviewer> = if args.yes {
        Box::new(AutoReviewer)
    } else {
        Box::new(PromptReviewer::new(io::stdin().lock(), io::stderr(), colors_enabled))
    };

    let options = RenameOptions { dry_run: args.dry };

    let result = rename_to_canonical(
        &args.target_dir,
        &entries,
        &searcher,
        reviewer.as_mut(),
        &options,
        &mut progress,
    )?;

    // Step 3: Report
    let mut stdout = io::stdout();
    let displayed = if args.json {
        display_json(&result, &mut stdout)
    } else if args.simple {
        display_dry_run_simple(&result, &mut stdout)
    } else if args.dry {
        display_dry_run(&result, &mut stdout)
    } else {
        display_execution_result(&result, &mut stdout)
    };
    displayed.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    if result.has_failures() {
        return Err(AppError::RenamesFailed {
            failed: result.failures.len(),
            total: result.failures.len() + result.len(),
        });
    }

    Ok(())
}
