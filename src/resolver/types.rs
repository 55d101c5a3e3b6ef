/// Outcome of reviewing one file's proposed name.
///
/// A proposal is either accepted as is, or rejected in favour of a listed
/// candidate, a typed title, or leaving the file alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Keep the automatic proposal
    Accept,
    /// Use the candidate at this index as the base title
    Choose(usize),
    /// Use a title typed by the reviewer
    ManualEntry(String),
    /// Do not rename the file
    Skip,
}

impl ReviewDecision {
    pub fn description(&self) -> &'static str {
        match self {
            ReviewDecision::Accept => "accepted",
            ReviewDecision::Choose(_) => "chosen",
            ReviewDecision::ManualEntry(_) => "entered manually",
            ReviewDecision::Skip => "skipped",
        }
    }
}
