use crate::k6_cli::K6Cli;
use futures::future::join_all;
use k6_action_common::constants::messages;
use k6_action_common::K6ActionError;
use k6_action_sdk::{OutputMode, ProcessLaunchError};

impl K6Cli {
    /// Return the paths for which `k6 inspect --execution-requirements` exits
    /// with status 0, in input order.
    ///
    /// Every inspection is started before any of them is awaited. Each
    /// outcome lands in its own slot, and the slots are compacted once all
    /// processes have finished. A path whose inspection cannot be launched is
    /// reported as an error and counted as invalid.
    pub async fn validate_test_paths(
        &self,
        test_paths: &[String],
        flags: &[String],
    ) -> Result<Vec<String>, K6ActionError> {
        if test_paths.is_empty() {
            return Err(K6ActionError::NoInput);
        }

        self.trace.info(messages::VALIDATING);

        let slots: Vec<bool> = join_all(test_paths.iter().map(|path| self.inspect(path, flags))).await;

        Ok(test_paths
            .iter()
            .zip(slots)
            .filter_map(|(path, valid)| valid.then(|| path.clone()))
            .collect())
    }

    async fn inspect(&self, path: &str, flags: &[String]) -> bool {
        let args = Self::inspect_args(flags, path);
        let result = self
            .invoker
            .execute(
                &self.program,
                &args,
                OutputMode::DiscardStdout,
                self.cancellation_token.clone(),
            )
            .await;

        match result {
            Ok(exit_code) => {
                if exit_code != 0 {
                    tracing::debug!("Inspection of '{}' exited with code {}", path, exit_code);
                }
                exit_code == 0
            }
            Err(e) => {
                match e.downcast_ref::<ProcessLaunchError>() {
                    Some(launch) => self.trace.error(
                        &K6ActionError::Launch {
                            path: path.to_string(),
                            reason: launch.source.to_string(),
                        }
                        .to_string(),
                    ),
                    None => self
                        .trace
                        .error(&format!("Inspection of '{path}' did not complete: {e:#}")),
                }
                false
            }
        }
    }
}
