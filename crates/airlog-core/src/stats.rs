//! ava.js pass/fail summary over a processed task log.

use std::fmt;

use crate::timestamp;
use crate::{CoreError, DagRunId, ProcessedLog};

pub use crate::processor::COMPLETION_MARKER;

/// Marker ava.js prints for a passing test.
pub const PASS_MARKER: &str = "INFO -   ✔";

/// Marker ava.js prints for a failing test.
pub const FAIL_MARKER: &str = "INFO -   ✖";

const RULE: &str = "======================================================";

/// Pass/fail tally of one task log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatSummary {
    /// Number of passing test lines.
    pub pass: usize,

    /// Number of failing test lines.
    pub fail: usize,

    /// Whether the task process exited.
    pub completed: bool,

    /// Seconds between the first and last timestamped lines, 0 if unknown.
    pub elapsed_secs: i64,

    /// The failing test lines, verbatim.
    pub fail_lines: Vec<String>,
}

impl StatSummary {
    /// Summarize a processed log.
    ///
    /// Elapsed time is skipped (left at 0) when either marker is missing, but a
    /// marker whose timestamp does not parse is an error.
    pub fn from_log(log: &ProcessedLog) -> Result<Self, CoreError> {
        let pass = log.lines().iter().filter(|l| l.contains(PASS_MARKER)).count();
        let fail_lines: Vec<String> = log
            .lines()
            .iter()
            .filter(|l| l.contains(FAIL_MARKER))
            .cloned()
            .collect();

        let elapsed_secs = match (log.first_marker(), log.last_marker()) {
            (Some(first), Some(last)) => timestamp::elapsed_secs(first, last)?,
            _ => 0,
        };

        Ok(Self {
            pass,
            fail: fail_lines.len(),
            completed: log.exited(),
            elapsed_secs,
            fail_lines,
        })
    }

    /// Total number of test lines seen.
    pub fn total(&self) -> usize {
        self.pass + self.fail
    }

    /// Report file name for a run: `<run_id>.attention-<fail>_<total>.log`.
    pub fn file_name(&self, run_id: &DagRunId) -> String {
        format!("{}.attention-{}_{}.log", run_id, self.fail, self.total())
    }
}

impl fmt::Display for StatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{RULE}\r\nTOTAL: {} PASS: {}, FAIL: {}\r\n\nFinished: {}, Time Taken {} seconds\n{RULE}\r\n{}",
            self.total(),
            self.pass,
            self.fail,
            self.completed,
            self.elapsed_secs,
            self.fail_lines.join("\r\n")
        )
    }
}
