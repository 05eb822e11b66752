use crate::command::K6Invocation;
use anyhow::Result;
use k6_action_common::constants::k6;
use k6_action_sdk::{OutputMode, ProcessInvoker, TraceWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Handle on the k6 executable used for inspections and test runs.
pub struct K6Cli {
    pub(crate) program: PathBuf,
    pub(crate) invoker: ProcessInvoker,
    pub(crate) trace: Arc<dyn TraceWriter>,
    pub(crate) cancellation_token: CancellationToken,
}

impl K6Cli {
    /// `program` is the resolved k6 executable. Cancelling
    /// `cancellation_token` interrupts every process started through this
    /// handle.
    pub fn new(
        program: impl Into<PathBuf>,
        trace: Arc<dyn TraceWriter>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            program: program.into(),
            invoker: ProcessInvoker::new(trace.clone()),
            trace,
            cancellation_token,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Arguments for `k6 inspect --execution-requirements <flags...> <path>`.
    pub fn inspect_args(flags: &[String], path: &str) -> Vec<String> {
        k6::INSPECT_ARGS
            .iter()
            .map(|a| a.to_string())
            .chain(flags.iter().cloned())
            .chain(std::iter::once(path.to_string()))
            .collect()
    }

    /// Execute `invocation` with this handle's executable and return the exit
    /// code. k6 output is shown to the operator as it happens.
    pub async fn run(&self, invocation: &K6Invocation, cancel: CancellationToken) -> Result<i32> {
        self.invoker
            .execute(&self.program, &invocation.args, OutputMode::Inherit, cancel)
            .await
    }
}
