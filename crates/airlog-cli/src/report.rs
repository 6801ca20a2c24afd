//! Report files written under the report directory.

use std::io;
use std::path::{Path, PathBuf};

use airlog_core::{DagRunId, StatSummary, TaskId};
use tracing::info;

/// Write the cleaned log to `<report_dir>/<task_id>.log`.
pub async fn write_task_log(
    report_dir: &Path,
    task_id: &TaskId,
    content: &str,
) -> io::Result<PathBuf> {
    let path = report_dir.join(format!("{}.log", task_id));
    write(&path, content).await?;
    Ok(path)
}

/// Write the ava.js summary to `<report_dir>/<run_id>.attention-<fail>_<total>.log`.
pub async fn write_summary(
    report_dir: &Path,
    run_id: &DagRunId,
    summary: &StatSummary,
) -> io::Result<PathBuf> {
    let path = report_dir.join(summary.file_name(run_id));
    write(&path, &summary.to_string()).await?;
    Ok(path)
}

async fn write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), bytes = content.len(), "Wrote report");
    Ok(())
}
