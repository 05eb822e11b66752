use crate::cloud::is_cloud_integration_enabled;
use crate::command::k6_run_invocation;
use crate::discovery::find_test_paths;
use crate::executor::{TestExecutor, TestRun};
use crate::inputs::ActionArgs;
use crate::k6_cli::K6Cli;
use crate::script_path::clean_script_path;
use anyhow::Result;
use k6_action_common::constants::k6;
use k6_action_common::{ActionConfig, K6ActionError};
use k6_action_sdk::{ArgUtil, TraceWriter, WhichUtil};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Discover, validate and run the k6 tests described by `args`.
///
/// The cloud configuration is checked before anything is spawned. Any
/// invalid script fails the action before a single test runs.
pub async fn run_action(
    args: &ActionArgs,
    config: &ActionConfig,
    trace: Arc<dyn TraceWriter>,
    cancellation_token: CancellationToken,
) -> Result<()> {
    let is_cloud = is_cloud_integration_enabled(config)?;
    if is_cloud {
        let mode = if args.cloud_run_locally {
            "running locally with results streamed to k6 Cloud"
        } else {
            "running in k6 Cloud"
        };
        trace.info(&format!("☁️ Cloud integration enabled, {mode}."));
    }

    let test_paths = find_test_paths(&ArgUtil::split_list(&args.path))?;
    if test_paths.is_empty() {
        return Err(K6ActionError::NoInput.into());
    }

    let program = resolve_k6(args.k6_binary.as_ref())?;
    let cli = K6Cli::new(program, trace.clone(), cancellation_token);

    let inspect_flags = ArgUtil::split_flags(&args.inspect_flags);
    let valid_paths = cli.validate_test_paths(&test_paths, &inspect_flags).await?;

    if valid_paths.len() != test_paths.len() {
        let invalid: Vec<String> = test_paths
            .iter()
            .filter(|p| !valid_paths.contains(p))
            .map(|p| clean_script_path(p, config))
            .collect();
        for path in &invalid {
            trace.error(&format!("❌ Invalid test file: {path}"));
        }
        return Err(K6ActionError::InvalidScripts { paths: invalid }.into());
    }

    trace.info(&format!("✅ {} test file(s) verified.", valid_paths.len()));
    if args.only_verify_scripts {
        trace.info("Only verifying scripts, skipping test runs.");
        return Ok(());
    }

    let runs: Vec<TestRun> = valid_paths
        .iter()
        .map(|path| TestRun {
            name: clean_script_path(path, config),
            invocation: k6_run_invocation(
                path,
                &args.flags,
                is_cloud,
                args.cloud_run_locally,
                trace.as_ref(),
            ),
        })
        .collect();

    let reports = TestExecutor::new(&cli, args.parallel, args.fail_fast)
        .run_all(&runs)
        .await;

    let failed = reports.iter().filter(|r| !r.outcome.is_passed()).count();
    for report in &reports {
        let line = format!("{}: {}", report.name, report.outcome);
        if report.outcome.is_passed() {
            trace.info(&format!("✅ {line}"));
        } else {
            trace.error(&format!("❌ {line}"));
        }
    }

    if failed > 0 {
        return Err(K6ActionError::TestsFailed {
            failed,
            total: reports.len(),
        }
        .into());
    }

    trace.info("🎉 All tests passed.");
    Ok(())
}

fn resolve_k6(explicit: Option<&PathBuf>) -> Result<PathBuf, K6ActionError> {
    let command = explicit
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| k6::EXECUTABLE.to_string());

    match WhichUtil::which(&command, true) {
        Ok(Some(path)) => Ok(path),
        Ok(None) => Err(K6ActionError::K6NotFound { reason: command }),
        Err(e) => Err(K6ActionError::K6NotFound {
            reason: e.to_string(),
        }),
    }
}
