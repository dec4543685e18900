//! Asynchronous task polling for queued server-side jobs
//!
//! Several API operations enqueue work server-side and return a `task_id`
//! instead of a result. A [`Task`] drives one such job: `poll` performs a
//! single status round trip, `wait` loops with a fixed interval until the
//! server reports a terminal status or a deadline passes.
//!
//! # Status protocol
//!
//! The result endpoint reports a `status` string. `SUCCESS` and `FAILURE`
//! are terminal; `PENDING` and every other value (including an absent or
//! empty status) mean the job is still running. On `SUCCESS` the payload is
//! taken from the `result` field, falling back to `data` when `result` is
//! absent or empty; on `FAILURE` it is taken from `error`.

use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::constants::polling;
use crate::errors::{Error, Result};
use crate::requestor::ApiRequestor;

/// Substitution point for the task id in a result endpoint template
pub const TASK_ID_PLACEHOLDER: &str = "{task_id}";

const STATUS_SUCCESS: &str = "SUCCESS";
const STATUS_FAILURE: &str = "FAILURE";

/// One server-side unit of asynchronous work, identified by an opaque id.
///
/// A task is owned by a single caller; `wait` borrows it mutably for the
/// whole polling loop, so there is no internal locking.
#[derive(Debug)]
pub struct Task {
    requestor: ApiRequestor,
    task_id: String,
    result_endpoint: String,
    last_status: Option<String>,
    last_payload: Option<Value>,
    finished: bool,
}

impl Task {
    /// Bind a task id to a result endpoint template.
    ///
    /// The template must contain the `{task_id}` placeholder exactly once.
    pub fn new(
        requestor: ApiRequestor,
        task_id: impl Into<String>,
        result_endpoint: &str,
    ) -> Result<Self> {
        if result_endpoint.matches(TASK_ID_PLACEHOLDER).count() != 1 {
            return Err(Error::Protocol {
                reason: format!(
                    "result endpoint '{}' must contain exactly one {} placeholder",
                    result_endpoint, TASK_ID_PLACEHOLDER
                ),
            });
        }

        Ok(Self {
            requestor,
            task_id: task_id.into(),
            result_endpoint: result_endpoint.to_string(),
            last_status: None,
            last_payload: None,
            finished: false,
        })
    }

    /// Build a task from a submission response carrying a `task_id` field.
    pub(crate) fn from_submission(
        requestor: &ApiRequestor,
        response: &Value,
        submit_endpoint: &str,
        result_endpoint: &str,
    ) -> Result<Self> {
        let task_id = response
            .get("task_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Protocol {
                reason: format!("no 'task_id' returned from {} endpoint", submit_endpoint),
            })?;

        Self::new(requestor.clone(), task_id, result_endpoint)
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Last status string reported by the server, if any poll has run.
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// True once a terminal status (`SUCCESS` or `FAILURE`) has been observed.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The result payload, if the task has finished successfully.
    pub fn result(&self) -> Option<&Value> {
        if self.finished && self.last_status.as_deref() == Some(STATUS_SUCCESS) {
            self.last_payload.as_ref()
        } else {
            None
        }
    }

    /// The error detail, if the task has failed.
    pub fn error(&self) -> Option<&Value> {
        if self.finished && self.last_status.as_deref() == Some(STATUS_FAILURE) {
            self.last_payload.as_ref()
        } else {
            None
        }
    }

    /// Perform a single poll against the result endpoint.
    ///
    /// Exactly one round trip, updating status and payload in place. There
    /// is no short-circuit for finished tasks: polling again performs
    /// another round trip and may overwrite the stored outcome.
    pub async fn poll(&mut self) -> Result<()> {
        let endpoint = self.result_endpoint.replace(TASK_ID_PLACEHOLDER, &self.task_id);
        let response = self.requestor.get(&endpoint, None).await?;

        let status = response.get("status").and_then(Value::as_str).map(str::to_string);
        debug!("Task {} reported status {:?}", self.task_id, status);

        match status.as_deref() {
            Some(STATUS_SUCCESS) => {
                self.finished = true;
                self.last_payload = Some(success_payload(&response));
            }
            Some(STATUS_FAILURE) => {
                self.finished = true;
                self.last_payload = Some(response.get("error").cloned().unwrap_or(Value::Null));
            }
            // PENDING and any unrecognized status mean still running
            _ => {}
        }
        self.last_status = status;

        Ok(())
    }

    /// Poll in a loop until the task finishes or the deadline passes.
    ///
    /// Returns the result payload on `SUCCESS`. A `FAILURE` status becomes
    /// `Error::TaskFailed`; exceeding `timeout` becomes `Error::TaskTimedOut`.
    /// Any error from a poll itself propagates immediately, unwrapped.
    ///
    /// The deadline is checked after a poll and before sleeping, with an
    /// exclusive bound: a poll landing exactly on the deadline still counts.
    pub async fn wait(&mut self, poll_interval: Duration, timeout: Duration) -> Result<Value> {
        info!(
            "Waiting for task {} (poll every {}s, timeout {}s)",
            self.task_id,
            poll_interval.as_secs_f64(),
            timeout.as_secs()
        );

        let start = Instant::now();
        loop {
            self.poll().await?;
            if self.finished {
                break;
            }
            if start.elapsed() > timeout {
                warn!("Task {} timed out after {}s", self.task_id, timeout.as_secs());
                return Err(Error::TaskTimedOut {
                    task_id: self.task_id.clone(),
                    timeout,
                });
            }
            sleep(poll_interval).await;
        }

        if self.last_status.as_deref() == Some(STATUS_SUCCESS) {
            info!("Task {} completed successfully", self.task_id);
            Ok(self.last_payload.clone().unwrap_or(Value::Null))
        } else {
            let detail = self.last_payload.clone().unwrap_or(Value::Null);
            warn!("Task {} failed: {}", self.task_id, detail);
            Err(Error::TaskFailed {
                task_id: self.task_id.clone(),
                detail,
            })
        }
    }

    /// `wait` with the library defaults: 2s interval, 300s timeout.
    pub async fn wait_default(&mut self) -> Result<Value> {
        self.wait(polling::POLL_INTERVAL, polling::WAIT_TIMEOUT).await
    }
}

/// Success payload: `result` preferred, `data` when `result` is absent or empty.
fn success_payload(response: &Value) -> Value {
    match response.get("result") {
        Some(result) if !is_empty(result) => result.clone(),
        _ => response.get("data").cloned().unwrap_or(Value::Null),
    }
}

/// Empty means null, `""`, `[]` or `{}`. `false` and `0` are real payloads.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}
