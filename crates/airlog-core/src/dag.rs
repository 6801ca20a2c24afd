//! DAG run and task instance records as reported by the Airflow REST API.

use crate::{CoreError, DagId, DagRunId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of a DAG run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DagRunState {
    /// Run created but not yet started.
    #[default]
    Queued,
    /// Run is executing.
    Running,
    /// All tasks finished successfully.
    Success,
    /// At least one task failed.
    Failed,
    /// A state this client does not know about.
    #[serde(other)]
    Other,
}

impl DagRunState {
    /// Returns true if the run has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// One execution of a DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagRun {
    /// DAG this run belongs to.
    pub dag_id: DagId,

    /// Run identifier.
    pub dag_run_id: DagRunId,

    /// Logical date of the run, as sent by the server.
    #[serde(default)]
    pub execution_date: String,

    /// When the run started; null while queued.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// Current run state.
    #[serde(default)]
    pub state: DagRunState,
}

impl DagRun {
    /// Reject runs that lack the identifiers needed for follow-up calls.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.dag_id.is_blank() {
            return Err(CoreError::InvalidInput("dag run has no dag_id".into()));
        }
        if self.dag_run_id.is_blank() {
            return Err(CoreError::InvalidInput(format!(
                "dag run of '{}' has no dag_run_id",
                self.dag_id
            )));
        }
        Ok(())
    }
}

/// State of a task instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskInstanceState {
    Scheduled,
    Queued,
    Running,
    Success,
    Failed,
    UpstreamFailed,
    UpForRetry,
    UpForReschedule,
    Skipped,
    Deferred,
    Removed,
    Restarting,
    /// A state this client does not know about.
    #[serde(other)]
    Other,
}

/// One task's execution within a DAG run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInstance {
    /// DAG the task belongs to.
    pub dag_id: DagId,

    /// Task identifier.
    pub task_id: TaskId,

    /// Attempt index; the log endpoint is addressed by it.
    pub try_number: u32,

    /// Logical date of the owning run.
    #[serde(default)]
    pub execution_date: String,

    /// Current state; null before scheduling.
    #[serde(default)]
    pub state: Option<TaskInstanceState>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub max_tries: Option<u32>,
}
