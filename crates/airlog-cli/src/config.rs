//! CLI configuration.

use std::path::PathBuf;

use airlog_client::ClientConfig;
use airlog_core::{DagId, DagRunId, FilterPolicy, TaskId};

/// Where the cleaned log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Print between banners on stdout.
    Stdout,
    /// Write report files under `report_dir`.
    Files { report_dir: PathBuf },
}

/// Immutable settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Airflow connection settings.
    pub client: ClientConfig,

    /// DAG to inspect.
    pub dag_id: DagId,

    /// Task whose log is fetched.
    pub task_id: TaskId,

    /// Specific run; the latest run when unset.
    pub run_id: Option<DagRunId>,

    /// Try to fetch; the task instance's current try when unset.
    pub try_number: Option<u32>,

    /// Output destination.
    pub output: Output,

    /// Log filtering policy.
    pub filter: FilterPolicy,

    /// Write an ava.js pass/fail summary next to the log.
    pub avajs_stat: bool,

    /// Open the web UI and written reports.
    pub open_in_browser: bool,
}
