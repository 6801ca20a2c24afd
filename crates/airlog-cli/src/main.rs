//! airlog - fetch, clean and summarize Airflow task logs.

mod browser;
mod config;
mod report;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use airlog_client::config::DEFAULT_BASE_URL;
use airlog_client::{AirflowClient, ClientConfig, Credentials};
use airlog_core::processor::DEFAULT_SENTINEL;
use airlog_core::{CoreError, FilterPolicy, LogProcessor, StatSummary};

use config::{Config, Output};

const LOG_BEGIN: &str = "===================== AIRFLOW LOG BEGIN =====================";
const LOG_END: &str = "===================== AIRFLOW LOG END =====================";

/// Fetch the log of a task in the latest (or given) run of a DAG.
#[derive(Parser, Debug)]
#[command(name = "airlog", version, about = "Fetch and summarize Airflow task logs")]
struct Args {
    /// DAG id
    #[arg(short, long)]
    dag_id: String,

    /// Task id within the DAG
    #[arg(short, long)]
    task_id: String,

    /// Airflow webserver base URL
    #[arg(short, long, env = "AIRFLOW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Use this DAG run instead of the latest one
    #[arg(short, long)]
    run_id: Option<String>,

    /// Fetch this try instead of the task's current one
    #[arg(long)]
    try_number: Option<u32>,

    /// Write results to the report directory instead of stdout
    #[arg(short = 'f', long)]
    to_file: bool,

    /// Report directory, relative to the working directory
    #[arg(long, default_value = "reports")]
    report_dir: PathBuf,

    /// Open the Airflow log page and written reports in the browser
    #[arg(short = 'o', long)]
    open_in_browser: bool,

    /// Write an ava.js pass/fail summary next to the log
    #[arg(short = 'a', long, requires = "to_file")]
    avajs_stat: bool,

    /// Keep lines containing INFO (the default)
    #[arg(short = 'i', long)]
    keep_info: bool,

    /// Drop lines containing INFO
    #[arg(long, conflicts_with_all = ["keep_info", "avajs_stat"])]
    drop_info: bool,

    /// Cut the log at the first line containing this text
    #[arg(long, default_value = DEFAULT_SENTINEL, conflicts_with = "no_truncate")]
    sentinel: String,

    /// Never cut the log short
    #[arg(long)]
    no_truncate: bool,

    /// Basic auth user
    #[arg(long, env = "AIRFLOW_USERNAME", default_value = "airflow")]
    username: String,

    /// Basic auth password
    #[arg(long, env = "AIRFLOW_PASSWORD", default_value = "airflow", hide_env_values = true)]
    password: String,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let output = if args.to_file {
            Output::Files {
                report_dir: args.report_dir,
            }
        } else {
            Output::Stdout
        };

        Self {
            client: ClientConfig {
                base_url: args.base_url,
                credentials: Credentials {
                    username: args.username,
                    password: args.password,
                },
                timeout: args.timeout_secs.map(Duration::from_secs),
            },
            dag_id: args.dag_id.into(),
            task_id: args.task_id.into(),
            run_id: args.run_id.map(Into::into),
            try_number: args.try_number,
            output,
            filter: FilterPolicy {
                drop_info: args.drop_info && !args.keep_info,
                sentinel: (!args.no_truncate).then_some(args.sentinel),
            },
            avajs_stat: args.avajs_stat,
            open_in_browser: args.open_in_browser,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the task log itself.
    let default_filter = if args.verbose { "airlog=debug" } else { "airlog=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from(args);

    info!(
        dag_id = %config.dag_id,
        task_id = %config.task_id,
        base_url = %config.client.base_url,
        "Fetching task log"
    );

    run(&config).await
}

async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = AirflowClient::new(&config.client)?;

    let dag_run = match &config.run_id {
        Some(run_id) => client.get_dag_run(&config.dag_id, run_id).await?,
        None => client.get_latest_run_of_dag(&config.dag_id).await?,
    };

    let mut task = client.get_task_instance(&dag_run, &config.task_id).await?;
    if let Some(try_number) = config.try_number {
        task.try_number = try_number;
    }

    let raw = client.get_task_log(&task, &dag_run.dag_run_id).await?;
    let log = LogProcessor::new(config.filter.clone()).process(&raw);
    if log.is_truncated() {
        info!(lines = log.lines().len(), "Log truncated at sentinel");
    }

    let last_marker = log.last_marker().ok_or_else(|| {
        CoreError::MissingTimestamp(format!("no timestamped line in log of '{}'", task.task_id))
    })?;

    // The cleaned log is echoed in both modes; files come in addition.
    println!("{}", framed(&log.content()));

    let mut reports = Vec::new();
    if let Output::Files { report_dir } = &config.output {
        println!("First: {}", log.first_marker().unwrap_or("-"));
        println!("Last:  {}", last_marker);

        let path = report::write_task_log(report_dir, &task.task_id, &log.content()).await?;
        println!("Log:     {}", path.display());
        reports.push(path);

        if config.avajs_stat {
            let summary = StatSummary::from_log(&log)?;
            let path = report::write_summary(report_dir, &dag_run.dag_run_id, &summary).await?;
            println!(
                "Summary: {} (TOTAL: {} PASS: {}, FAIL: {}, Finished: {}, {}s)",
                path.display(),
                summary.total(),
                summary.pass,
                summary.fail,
                summary.completed,
                summary.elapsed_secs
            );
            reports.push(path);
        }
    }

    if config.open_in_browser {
        let mut targets = vec![client.web_log_url(&task)?.to_string()];
        targets.extend(reports.iter().map(|p| p.display().to_string()));
        for target in targets {
            if let Err(e) = browser::open(&target) {
                warn!(target = %target, error = %e, "Failed to open in browser");
            }
        }
    }

    Ok(())
}

/// Wrap log content in the begin/end banners.
fn framed(content: &str) -> String {
    format!("{}\n{}\n{}", LOG_BEGIN, content, LOG_END)
}
