//! Airflow REST API client for airlog.
//!
//! Wraps the handful of `/api/v1` endpoints needed to locate a DAG run, find a
//! task instance in it, and download that task's log text.

pub mod airflow;
pub mod config;
pub mod error;
pub mod http;

pub use airflow::AirflowClient;
pub use config::{ClientConfig, Credentials};
pub use error::ClientError;
pub use http::HttpClient;
