use crate::command::K6Invocation;
use crate::k6_cli::K6Cli;
use futures::future::join_all;
use k6_action_sdk::ProcessCancelledError;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// Result of a single test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    /// k6 exited with this non-zero code (thresholds failed, script error, ...).
    Failed(i32),
    /// k6 could not be started or waited on.
    Errored(String),
    /// Interrupted by fail-fast or by the operator.
    Cancelled,
    /// Never started because an earlier test failed with fail-fast on.
    Skipped,
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Passed => write!(f, "passed"),
            TestOutcome::Failed(code) => write!(f, "failed with exit code {code}"),
            TestOutcome::Errored(reason) => write!(f, "errored: {reason}"),
            TestOutcome::Cancelled => write!(f, "cancelled"),
            TestOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// A test to execute: the display name and the command to run.
#[derive(Debug, Clone)]
pub struct TestRun {
    pub name: String,
    pub invocation: K6Invocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub name: String,
    pub outcome: TestOutcome,
}

/// Runs a batch of k6 tests sequentially or in parallel.
pub struct TestExecutor<'a> {
    cli: &'a K6Cli,
    parallel: bool,
    fail_fast: bool,
}

impl<'a> TestExecutor<'a> {
    pub fn new(cli: &'a K6Cli, parallel: bool, fail_fast: bool) -> Self {
        Self {
            cli,
            parallel,
            fail_fast,
        }
    }

    /// Run every test and report the outcomes in input order.
    pub async fn run_all(&self, runs: &[TestRun]) -> Vec<TestReport> {
        if self.parallel {
            self.run_parallel(runs).await
        } else {
            self.run_sequential(runs).await
        }
    }

    async fn run_sequential(&self, runs: &[TestRun]) -> Vec<TestReport> {
        let cancel = self.cli.cancellation_token();
        let mut stop = false;
        let mut reports = Vec::with_capacity(runs.len());

        for run in runs {
            if stop || cancel.is_cancelled() {
                reports.push(TestReport {
                    name: run.name.clone(),
                    outcome: TestOutcome::Skipped,
                });
                continue;
            }

            self.cli.trace.group(&format!("🚀 Running test: {}", run.name));
            let outcome = self.run_one(run, cancel.clone()).await;
            self.cli.trace.end_group();

            if !outcome.is_passed() && self.fail_fast {
                self.cli
                    .trace
                    .warning(&format!("Test '{}' {outcome}; skipping remaining tests.", run.name));
                stop = true;
            }
            reports.push(TestReport {
                name: run.name.clone(),
                outcome,
            });
        }

        reports
    }

    async fn run_parallel(&self, runs: &[TestRun]) -> Vec<TestReport> {
        let batch = self.cli.cancellation_token().child_token();

        let tasks = runs.iter().map(|run| {
            let batch = batch.clone();
            async move {
                self.cli.trace.info(&format!("🚀 Running test: {}", run.name));
                let outcome = self.run_one(run, batch.clone()).await;
                if !outcome.is_passed() && self.fail_fast && !batch.is_cancelled() {
                    self.cli
                        .trace
                        .warning(&format!("Test '{}' {outcome}; cancelling remaining tests.", run.name));
                    batch.cancel();
                }
                TestReport {
                    name: run.name.clone(),
                    outcome,
                }
            }
        });

        join_all(tasks).await
    }

    async fn run_one(&self, run: &TestRun, cancel: CancellationToken) -> TestOutcome {
        match self.cli.run(&run.invocation, cancel).await {
            Ok(0) => TestOutcome::Passed,
            Ok(code) => TestOutcome::Failed(code),
            Err(e) if e.downcast_ref::<ProcessCancelledError>().is_some() => TestOutcome::Cancelled,
            Err(e) => TestOutcome::Errored(format!("{e:#}")),
        }
    }
}
