use crate::trace::TraceWriter;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

/// The duration to wait after sending SIGINT before escalating to SIGTERM.
const SIGINT_TIMEOUT: Duration = Duration::from_millis(7500);
/// The duration to wait after sending SIGTERM before escalating to SIGKILL.
const SIGTERM_TIMEOUT: Duration = Duration::from_millis(2500);

/// The process could not be started at all (missing binary, permissions, ...).
#[derive(Debug, thiserror::Error)]
#[error("Failed to start process '{file_name}' with arguments '{arguments}': {source}")]
pub struct ProcessLaunchError {
    pub file_name: String,
    pub arguments: String,
    #[source]
    pub source: std::io::Error,
}

/// The process was stopped because its cancellation token fired.
#[derive(Debug, thiserror::Error)]
#[error("Process '{file_name}' was cancelled (exit code {exit_code}).")]
pub struct ProcessCancelledError {
    pub file_name: String,
    pub exit_code: i32,
}

/// Where the child's stdout goes. stdin and stderr are always inherited so
/// the operator sees diagnostics from the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// stdout is shared with the parent.
    Inherit,
    /// stdout is discarded.
    DiscardStdout,
}

/// Spawns child processes, waits for them, and supports graceful cancellation
/// (SIGINT → SIGTERM → SIGKILL).
pub struct ProcessInvoker {
    trace: Arc<dyn TraceWriter>,
}

impl ProcessInvoker {
    pub fn new(trace: Arc<dyn TraceWriter>) -> Self {
        Self { trace }
    }

    /// Execute `file_name` with `arguments` and return its exit code.
    ///
    /// The child is spawned before the first `.await`, so callers that create
    /// several of these futures and join them get all processes launched
    /// before any of them is waited on.
    ///
    /// Errors:
    /// * [`ProcessLaunchError`] if the process cannot be spawned.
    /// * [`ProcessCancelledError`] if `cancellation_token` fires first.
    ///
    /// A process killed by a signal reports exit code `-1`.
    pub async fn execute<S: AsRef<OsStr>>(
        &self,
        file_name: &Path,
        arguments: &[S],
        output: OutputMode,
        cancellation_token: CancellationToken,
    ) -> Result<i32> {
        let display_args = arguments
            .iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        let display_name = file_name.display().to_string();

        self.trace.debug(&format!(
            "Starting process: file name '{display_name}', arguments '{display_args}'"
        ));

        let mut cmd = Command::new(file_name);
        cmd.args(arguments)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        match output {
            OutputMode::Inherit => cmd.stdout(Stdio::inherit()),
            OutputMode::DiscardStdout => cmd.stdout(Stdio::null()),
        };

        let start = std::time::Instant::now();
        let mut child = cmd.spawn().map_err(|source| ProcessLaunchError {
            file_name: display_name.clone(),
            arguments: display_args.clone(),
            source,
        })?;

        let pid = child.id().unwrap_or(0);
        self.trace
            .debug(&format!("Process started with process id {pid}, waiting for process exit."));

        let exit_code: i32;
        let was_cancelled;

        tokio::select! {
            status = child.wait() => {
                was_cancelled = false;
                let status = status.context("Failed to wait for process")?;
                exit_code = status.code().unwrap_or(-1);
            }
            _ = cancellation_token.cancelled() => {
                was_cancelled = true;
                self.trace.debug(&format!("Cancellation requested for process {pid}."));
                exit_code = self.cancel_and_kill_process(&mut child).await;
            }
        }

        let elapsed = start.elapsed();
        self.trace.debug(&format!(
            "Finished process {pid} with exit code {exit_code}, and elapsed time {elapsed:.2?}."
        ));

        if was_cancelled {
            return Err(ProcessCancelledError {
                file_name: display_name,
                exit_code,
            }
            .into());
        }

        Ok(exit_code)
    }

    /// Attempt graceful cancellation: SIGINT → SIGTERM → SIGKILL.
    async fn cancel_and_kill_process(&self, child: &mut tokio::process::Child) -> i32 {
        for (signal, timeout) in [(Signal::Int, SIGINT_TIMEOUT), (Signal::Term, SIGTERM_TIMEOUT)] {
            if self.send_signal_and_wait(child, signal, timeout).await {
                return child
                    .wait()
                    .await
                    .map(|s| s.code().unwrap_or(-1))
                    .unwrap_or(-1);
            }
        }

        self.trace
            .debug("Killing process since both interrupt and terminate signals have been ignored.");
        let _ = child.kill().await;
        child
            .wait()
            .await
            .map(|s| s.code().unwrap_or(-1))
            .unwrap_or(-1)
    }

    /// Send a signal to the child process and wait up to `timeout` for it to exit.
    /// Returns `true` if the process exited within the timeout.
    #[cfg(unix)]
    async fn send_signal_and_wait(
        &self,
        child: &mut tokio::process::Child,
        signal: Signal,
        timeout: Duration,
    ) -> bool {
        let Some(pid) = child.id() else {
            // Already reaped.
            return true;
        };

        let sig = match signal {
            Signal::Int => nix::sys::signal::Signal::SIGINT,
            Signal::Term => nix::sys::signal::Signal::SIGTERM,
        };

        self.trace.debug(&format!("Sending {sig:?} to process {pid}."));
        if nix::sys::signal::kill(nix::unistd::Pid::from_raw(pid as i32), sig).is_err() {
            self.trace
                .debug(&format!("{sig:?} signal failed to send to process {pid}."));
            return false;
        }

        tokio::select! {
            result = child.wait() => result.is_ok(),
            _ = tokio::time::sleep(timeout) => {
                self.trace.debug(&format!(
                    "Process {pid} did not honor {sig:?} within {:.1}s.",
                    timeout.as_secs_f64()
                ));
                false
            }
        }
    }

    #[cfg(not(unix))]
    async fn send_signal_and_wait(
        &self,
        child: &mut tokio::process::Child,
        _signal: Signal,
        timeout: Duration,
    ) -> bool {
        // No POSIX signals; give the process the grace period and then kill.
        tokio::select! {
            result = child.wait() => result.is_ok(),
            _ = tokio::time::sleep(timeout) => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Signal {
    Int,
    Term,
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::trace::NullTraceWriter;
    use std::path::PathBuf;

    fn make_invoker() -> ProcessInvoker {
        ProcessInvoker::new(Arc::new(NullTraceWriter))
    }

    fn sh() -> PathBuf {
        PathBuf::from("sh")
    }

    #[tokio::test]
    async fn execute_returns_zero_exit_code() {
        let code = make_invoker()
            .execute(&sh(), &["-c", "exit 0"], OutputMode::DiscardStdout, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn execute_returns_non_zero_exit_code() {
        let code = make_invoker()
            .execute(&sh(), &["-c", "exit 3"], OutputMode::DiscardStdout, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(code, 3);
    }

    #[tokio::test]
    async fn execute_nonexistent_is_launch_error() {
        let args: [&str; 0] = [];
        let err = make_invoker()
            .execute(
                Path::new("nonexistent_command_xyz_123"),
                &args,
                OutputMode::Inherit,
                CancellationToken::new(),
            )
            .await
            .unwrap_err();
        let launch = err.downcast_ref::<ProcessLaunchError>().unwrap();
        assert_eq!(launch.file_name, "nonexistent_command_xyz_123");
    }

    #[tokio::test]
    async fn execute_cancelled_process_is_interrupted() {
        let cancel = CancellationToken::new();
        let invoker = make_invoker();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.cancel();
        });

        let start = std::time::Instant::now();
        let err = invoker
            .execute(&sh(), &["-c", "exec sleep 30"], OutputMode::DiscardStdout, cancel)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ProcessCancelledError>().is_some());
        assert!(start.elapsed() < Duration::from_secs(20));
    }
}
