//! Progress output for user-facing status updates.
//!
//! `Progress` is the single report sink of a run: every stage appends its
//! status lines to it. In verbose mode output is suppressed since tracing
//! handles everything. In normal mode output is shown with colors.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write + Send>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
    /// A `\r` counter line is on screen without its newline
    line_open: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Progress {
    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
            line_open: false,
        }
    }

    /// Create a progress reporter with a custom writer
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
            line_open: false,
        }
    }

    /// Create a silent progress reporter (for testing or verbose mode)
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
            line_open: false,
        }
    }

    /// Report the media files found in the target directory
    pub fn scan_complete(&mut self, count: usize, dir: &Path) {
        if self.silent {
            return;
        }
        let msg = format!("Found {} media files in {}", count, dir.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.cyan());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report search progress, rewriting the same line
    pub fn search_progress(&mut self, current: usize, total: usize) {
        if self.silent {
            return;
        }
        let counter = format!("[{}/{}]", current, total);
        if self.colors_enabled {
            let _ = write!(
                self.writer,
                "\r{} {}",
                "Searching titles".dimmed(),
                counter.cyan()
            );
        } else {
            let _ = write!(self.writer, "\rSearching titles {}", counter);
        }
        self.line_open = true;
        let _ = self.writer.flush();
    }

    /// Finish the search progress line
    pub fn search_complete(&mut self, total: usize) {
        if self.silent || total == 0 {
            return;
        }
        self.line_open = false;
        if self.colors_enabled {
            let _ = writeln!(self.writer, " {}", "done".green());
        } else {
            let _ = writeln!(self.writer, " done");
        }
    }

    /// Report the start of the review step
    pub fn review_start(&mut self, total: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        let msg = format!("Reviewing {} files", total);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.bold());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report a file that will not be renamed
    pub fn skipped(&mut self, name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "  {} {}", "-".dimmed(), name.dimmed());
        } else {
            let _ = writeln!(self.writer, "  - {} (skipped)", name);
        }
    }

    /// Report progress on a single rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.line_open {
            let _ = writeln!(self.writer);
            self.line_open = false;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report the end of the batch
    pub fn rename_complete(&mut self, count: usize, failed: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if dry_run {
            let msg = format!("Dry run complete. {} files would be renamed.", count);
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{}", msg.dimmed());
            } else {
                let _ = writeln!(self.writer, "{}", msg);
            }
        } else if failed > 0 {
            let msg = format!("{} files renamed, {} failed", count, failed);
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
            } else {
                let _ = writeln!(self.writer, "Rename finished. {}.", msg);
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} files renamed", count).green()
            );
        } else {
            let _ = writeln!(self.writer, "Rename complete. {} files renamed.", count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn create_test_progress() -> (Progress, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_rename_progress() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_progress(1, 3, "a.mkv", "Film (2001).mkv");
        progress.rename_progress(2, 3, "b.mkv", "Other (2002).mkv");

        let output = output(&buffer);
        assert!(output.contains("[1/3] a.mkv -> Film (2001).mkv"));
        assert!(output.contains("[2/3]"));
    }

    #[test]
    fn test_search_output() {
        let (mut progress, buffer) = create_test_progress();

        progress.search_progress(1, 2);
        progress.search_progress(2, 2);
        progress.search_complete(2);

        let output = output(&buffer);
        assert!(output.contains("Searching titles [2/2]"));
        assert!(output.ends_with(" done\n"));
    }

    #[test]
    fn test_warning_during_search_starts_new_line() {
        let (mut progress, buffer) = create_test_progress();

        progress.search_progress(1, 2);
        progress.warn("Search failed for \"Heat\": timed out");
        progress.search_progress(2, 2);
        progress.search_complete(2);

        let output = output(&buffer);
        assert!(output.contains("Searching titles [1/2]\nWarning: Search failed"));
        assert!(output.ends_with("Searching titles [2/2] done\n"));
    }

    #[test]
    fn test_warning_outside_search_has_no_blank_line() {
        let (mut progress, buffer) = create_test_progress();

        progress.warn("first");
        progress.warn("second");

        assert_eq!(output(&buffer), "Warning: first\nWarning: second\n");
    }

    #[test]
    fn test_rename_complete_with_failures() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_complete(2, 1, false);

        assert!(output(&buffer).contains("2 files renamed, 1 failed"));
    }

    #[test]
    fn test_silent_progress_writes_nothing() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let mut progress = Progress {
            writer: Box::new(TestWriter(buffer.clone())),
            silent: true,
            colors_enabled: false,
            line_open: false,
        };

        progress.warn("hidden");
        progress.rename_progress(1, 1, "a", "b");

        assert!(output(&buffer).is_empty());
    }
}
