use super::{ReviewError, Reviewer};
use crate::parser::MediaFile;
use crate::resolver::ReviewDecision;
use crate::sanitize::sanitize_title;
use colored::Colorize;
use std::io::{BufRead, Write};

const SKIP_LABEL: &str = "Do not rename";
const MANUAL_LABEL: &str = "Enter a name manually";

/// Line-oriented terminal reviewer.
///
/// A proposal is confirmed with `Y/n`. When it is rejected, or there is no
/// proposal, the candidates are listed along with the skip and manual entry
/// options.
pub struct PromptReviewer<R, W> {
    input: R,
    output: W,
    colors_enabled: bool,
}

impl<R: BufRead, W: Write> PromptReviewer<R, W> {
    pub fn new(input: R, output: W, colors_enabled: bool) -> Self {
        Self {
            input,
            output,
            colors_enabled,
        }
    }

    fn read_answer(&mut self) -> Result<String, ReviewError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ReviewError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    fn confirm(&mut self, file: &MediaFile, proposal: &str) -> Result<bool, ReviewError> {
        writeln!(self.output)?;
        if self.colors_enabled {
            writeln!(self.output, "  {}", file.original.dimmed())?;
            writeln!(self.output, " {} {}", "->".cyan(), proposal.bold())?;
        } else {
            writeln!(self.output, "  {}", file.original)?;
            writeln!(self.output, " -> {}", proposal)?;
        }

        loop {
            write!(self.output, "Accept? [Y/n] ")?;

            match self.read_answer()?.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn choose(&mut self, file: &MediaFile) -> Result<ReviewDecision, ReviewError> {
        if self.colors_enabled {
            writeln!(self.output, "Choose a name for {}:", file.original.bold())?;
        } else {
            writeln!(self.output, "Choose a name for {}:", file.original)?;
        }

        writeln!(self.output, "  0) {}", SKIP_LABEL)?;
        for (i, candidate) in file.results.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, candidate)?;
        }
        writeln!(self.output, "  m) {}", MANUAL_LABEL)?;

        loop {
            write!(self.output, "Choice: ")?;
            let answer = self.read_answer()?;

            if answer.eq_ignore_ascii_case("m") {
                return self.manual_entry();
            }

            match answer.parse::<usize>() {
                Ok(0) => return Ok(ReviewDecision::Skip),
                Ok(n) if n <= file.results.len() => return Ok(ReviewDecision::Choose(n - 1)),
                _ => writeln!(self.output, "Invalid choice: {}", answer)?,
            }
        }
    }

    fn manual_entry(&mut self) -> Result<ReviewDecision, ReviewError> {
        loop {
            write!(self.output, "Name: ")?;
            let text = self.read_answer()?;

            if sanitize_title(&text).is_empty() {
                writeln!(self.output, "Name cannot be empty.")?;
                continue;
            }

            return Ok(ReviewDecision::ManualEntry(text));
        }
    }
}

impl<R: BufRead, W: Write> Reviewer for PromptReviewer<R, W> {
    fn review(
        &mut self,
        file: &MediaFile,
        proposal: Option<&str>,
    ) -> Result<ReviewDecision, ReviewError> {
        if let Some(proposal) = proposal {
            if self.confirm(file, proposal)? {
                return Ok(ReviewDecision::Accept);
            }
        } else {
            writeln!(self.output)?;
            writeln!(self.output, "No match found for {}", file.original)?;
        }

        self.choose(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file_name;
    use std::io::Cursor;

    fn file_with_results() -> MediaFile {
        let mut file = parse_file_name("Movie.Title.2020.1080p.mkv");
        file.results = vec![
            "Movie Title (2020)".to_string(),
            "Movie Title (1980)".to_string(),
        ];
        file
    }

    fn review(
        input: &str,
        file: &MediaFile,
        proposal: Option<&str>,
    ) -> (Result<ReviewDecision, ReviewError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut reviewer =
                PromptReviewer::new(Cursor::new(input.as_bytes()), &mut output, false);
            reviewer.review(file, proposal)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accept_by_default() {
        let file = file_with_results();
        let (result, output) = review("\n", &file, Some("Movie Title (2020) [1080p].mkv"));

        assert_eq!(result.unwrap(), ReviewDecision::Accept);
        assert!(output.contains(" -> Movie Title (2020) [1080p].mkv"));
        assert!(output.contains("Accept? [Y/n]"));
    }

    #[test]
    fn test_reject_then_choose() {
        let file = file_with_results();
        let (result, output) = review("n\n2\n", &file, Some("Movie Title (2020) [1080p].mkv"));

        assert_eq!(result.unwrap(), ReviewDecision::Choose(1));
        assert!(output.contains("0) Do not rename"));
        assert!(output.contains("1) Movie Title (2020)"));
        assert!(output.contains("2) Movie Title (1980)"));
        assert!(output.contains("m) Enter a name manually"));
    }

    #[test]
    fn test_reject_then_skip() {
        let file = file_with_results();
        let (result, _) = review("no\n0\n", &file, Some("x.mkv"));

        assert_eq!(result.unwrap(), ReviewDecision::Skip);
    }

    #[test]
    fn test_no_proposal_goes_to_choice() {
        let file = parse_file_name("Film_MULTI_VO_DTS_Atmos_2160p.mkv");
        let (result, output) = review("m\nCustom: Name\n", &file, None);

        assert_eq!(
            result.unwrap(),
            ReviewDecision::ManualEntry("Custom: Name".to_string())
        );
        assert!(output.contains("No match found"));
        assert!(!output.contains("Accept?"));
    }

    #[test]
    fn test_empty_manual_entry_is_asked_again() {
        let file = file_with_results();
        let (result, output) = review("n\nm\n\n ?? \nHeat\n", &file, Some("x.mkv"));

        assert_eq!(
            result.unwrap(),
            ReviewDecision::ManualEntry("Heat".to_string())
        );
        assert_eq!(output.matches("Name cannot be empty.").count(), 2);
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let file = file_with_results();
        let (result, output) = review("maybe\nn\n7\nabc\n1\n", &file, Some("x.mkv"));

        assert_eq!(result.unwrap(), ReviewDecision::Choose(0));
        assert!(output.contains("Please answer y or n."));
        assert!(output.contains("Invalid choice: 7"));
        assert!(output.contains("Invalid choice: abc"));
    }

    #[test]
    fn test_closed_input() {
        let file = file_with_results();
        let (result, _) = review("", &file, Some("x.mkv"));

        assert!(matches!(result, Err(ReviewError::InputClosed)));
    }
}
