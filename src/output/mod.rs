use crate::rename::RenameResult;
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Operations: {}", result.operations.len())?;
    writeln!(writer)?;

    if result.operations.is_empty() {
        writeln!(writer, "No files to rename.")?;
    } else {
        writeln!(writer, "Planned changes:")?;
        writeln!(writer)?;

        for (i, op) in result.operations.iter().enumerate() {
            writeln!(writer, "  {}. From: {}", i + 1, op.source_name)?;
            writeln!(writer, "     To:   {}", op.destination_name)?;
            writeln!(writer)?;
        }
    }

    display_failures(result, writer)?;

    // Summary
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files would be renamed",
        result.operations.len()
    )?;
    display_counts(result, writer)?;

    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display planned renames in a simple tab-separated format for scripting
pub fn display_dry_run_simple(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    for op in &result.operations {
        writeln!(writer, "{}\t{}", op.source_name, op.destination_name)?;
    }
    Ok(())
}

/// Display the whole result as pretty-printed JSON
pub fn display_json(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully renamed {} files.",
        result.operations.len()
    )?;
    display_counts(result, writer)?;
    display_failures(result, writer)?;

    Ok(())
}

fn display_counts(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    if !result.skipped.is_empty() {
        writeln!(writer, "  {} files skipped", result.skipped.len())?;
    }
    if !result.unchanged.is_empty() {
        writeln!(writer, "  {} files already named correctly", result.unchanged.len())?;
    }
    if !result.failures.is_empty() {
        writeln!(writer, "  {} files failed", result.failures.len())?;
    }
    Ok(())
}

fn display_failures(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    if result.failures.is_empty() {
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "Failed:")?;
    for failure in &result.failures {
        writeln!(writer, "  [!] {}", failure.source_name)?;
        writeln!(writer, "      {}", failure.reason)?;
    }
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::RenameOperation;
    use std::path::PathBuf;

    fn create_test_result(dry_run: bool) -> RenameResult {
        let mut result = RenameResult::new(dry_run);

        result.add_operation(RenameOperation::new(
            PathBuf::from("/test/Movie.Title.2020.1080p.mkv"),
            "Movie Title (2020) [1080p].mkv".to_string(),
        ));

        let failed = RenameOperation::new(
            PathBuf::from("/test/Taken.mkv"),
            "Taken (2008).mkv".to_string(),
        );
        result.add_failure(&failed, "Destination already exists: Taken (2008).mkv");

        result.skipped.push("Unknown.mkv".to_string());

        result
    }

    #[test]
    fn test_display_dry_run() {
        let result = create_test_result(true);
        let mut output = Vec::new();

        display_dry_run(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("From: Movie.Title.2020.1080p.mkv"));
        assert!(output_str.contains("To:   Movie Title (2020) [1080p].mkv"));
        assert!(output_str.contains("1 files would be renamed"));
        assert!(output_str.contains("1 files skipped"));
        assert!(output_str.contains("[!] Taken.mkv"));
    }

    #[test]
    fn test_display_dry_run_empty() {
        let result = RenameResult::new(true);
        let mut output = Vec::new();

        display_dry_run(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("No files to rename"));
        assert!(!output_str.contains("Failed:"));
    }

    #[test]
    fn test_display_dry_run_simple() {
        let result = create_test_result(true);
        let mut output = Vec::new();

        display_dry_run_simple(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();

        assert_eq!(
            lines,
            vec!["Movie.Title.2020.1080p.mkv\tMovie Title (2020) [1080p].mkv"]
        );
    }

    #[test]
    fn test_display_json() {
        let result = create_test_result(false);
        let mut output = Vec::new();

        display_json(&result, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["dry_run"], false);
        assert_eq!(
            value["operations"][0]["destination_name"],
            "Movie Title (2020) [1080p].mkv"
        );
        assert_eq!(value["skipped"][0], "Unknown.mkv");
        assert_eq!(value["failures"][0]["source_name"], "Taken.mkv");
    }

    #[test]
    fn test_display_execution_result() {
        let result = create_test_result(false);
        let mut output = Vec::new();

        display_execution_result(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("Successfully renamed 1 files"));
        assert!(output_str.contains("1 files failed"));
        assert!(output_str.contains("Destination already exists"));
    }
}
