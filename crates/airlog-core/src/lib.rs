//! airlog Core Domain Types
//!
//! This crate contains the pure parts of airlog with no dependencies on:
//! - Network/HTTP
//! - Filesystem
//! - Runtime specifics
//!
//! It models Airflow DAG runs and task instances, and turns raw task log
//! text into cleaned content and ava.js pass/fail summaries.

pub mod dag;
pub mod error;
pub mod ids;
pub mod processor;
pub mod stats;
pub mod timestamp;

// Re-export commonly used types
pub use dag::{DagRun, DagRunState, TaskInstance, TaskInstanceState};
pub use error::CoreError;
pub use ids::{DagId, DagRunId, TaskId};
pub use processor::{FilterPolicy, LogProcessor, ProcessedLog};
pub use stats::StatSummary;
