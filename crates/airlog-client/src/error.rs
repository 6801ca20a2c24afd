//! Error types for the Airflow client.

use airlog_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to Airflow.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status}: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body did not match the expected shape.
    #[error("decode error for {url}: {message}")]
    Decode { url: String, message: String },

    /// The DAG has no runs.
    #[error("no runs found for dag '{0}'")]
    NoDagRuns(String),

    /// A run came back without usable identifiers.
    #[error("invalid dag run: {0}")]
    InvalidDagRun(#[from] CoreError),

    /// No task instance with the requested id in the run.
    #[error("task '{task_id}' not found in run '{dag_run_id}'")]
    TaskNotFound { task_id: String, dag_run_id: String },

    /// Log endpoint returned something other than text.
    #[error("log body is not text (content-type: {0})")]
    NonTextBody(String),

    /// Base URL could not be used to build request URLs.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
