//! Task log post-processing.
//!
//! Raw task logs mix Airflow's own timestamped lines with subprocess output
//! and a lot of `Subtask` echo noise. [`LogProcessor`] strips the noise,
//! remembers the first and last timestamped lines, and optionally cuts the
//! log at a sentinel line after which nothing useful follows.

/// Lines containing this are echoes of subtask output and are always dropped.
pub const NOISE_MARKER: &str = ": Subtask ";

/// Lines containing this are dropped when [`FilterPolicy::drop_info`] is set.
pub const INFO_MARKER: &str = "INFO";

/// Prefix of Airflow's timestamped lines (`[2021-...`).
pub const TIMESTAMP_PREFIX: &str = "[202";

/// Airflow prints this once the task process has exited.
pub const COMPLETION_MARKER: &str = "Task exited with return code";

/// Default truncation sentinel: npm's trailer after a failed script.
pub const DEFAULT_SENTINEL: &str = "npm ERR! This is probably not a problem with npm";

/// How raw log text is filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Drop every line containing `INFO`.
    pub drop_info: bool,

    /// Truncate at the first line containing this text, if set.
    pub sentinel: Option<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            drop_info: false,
            sentinel: Some(DEFAULT_SENTINEL.to_string()),
        }
    }
}

impl FilterPolicy {
    /// Builder method to disable truncation.
    pub fn without_sentinel(mut self) -> Self {
        self.sentinel = None;
        self
    }

    /// Builder method to drop INFO lines.
    pub fn dropping_info(mut self) -> Self {
        self.drop_info = true;
        self
    }
}

/// Cleaned log lines plus the timestamped lines that bound the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedLog {
    lines: Vec<String>,
    first_marker: Option<String>,
    last_marker: Option<String>,
    exited: bool,
    truncated: bool,
}

impl ProcessedLog {
    /// The remaining lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First line starting with a timestamp bracket.
    pub fn first_marker(&self) -> Option<&str> {
        self.first_marker.as_deref()
    }

    /// Last line starting with a timestamp bracket.
    pub fn last_marker(&self) -> Option<&str> {
        self.last_marker.as_deref()
    }

    /// Whether Airflow reported the task process exiting, even past the sentinel.
    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Whether the sentinel cut the log short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The cleaned content, lines rejoined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Applies a [`FilterPolicy`] to raw log text.
#[derive(Debug, Clone, Default)]
pub struct LogProcessor {
    policy: FilterPolicy,
}

impl LogProcessor {
    /// Create a processor with the given policy.
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    /// Filter `raw` into a [`ProcessedLog`]. Never fails.
    pub fn process(&self, raw: &str) -> ProcessedLog {
        let mut lines: Vec<String> = raw
            .split('\n')
            .filter(|l| !l.contains(NOISE_MARKER))
            .filter(|l| !(self.policy.drop_info && l.contains(INFO_MARKER)))
            .map(str::to_string)
            .collect();

        // Markers and the exit line come from the filtered lines before
        // truncation; Airflow writes both after npm's error trailer.
        let first_marker = lines.iter().find(|l| is_marker(l)).cloned();
        let last_marker = lines.iter().rev().find(|l| is_marker(l)).cloned();
        let exited = lines.iter().any(|l| l.contains(COMPLETION_MARKER));

        let mut truncated = false;
        if let Some(sentinel) = &self.policy.sentinel {
            if let Some(end) = lines.iter().position(|l| l.contains(sentinel.as_str())) {
                lines.truncate(end);
                truncated = true;
            }
        }

        ProcessedLog {
            lines,
            first_marker,
            last_marker,
            exited,
            truncated,
        }
    }
}

/// Returns true if the line starts with a year-stamped bracket.
pub fn is_marker(line: &str) -> bool {
    line.starts_with(TIMESTAMP_PREFIX)
}
