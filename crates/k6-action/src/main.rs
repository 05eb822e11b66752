// Entry point of the k6 action.
//
// Reads the action inputs (CLI flags or `INPUT_*` variables), sets up
// logging, and hands over to `driver::run_action`. Exit code 0 means every
// test was verified (and run, unless only verifying); 1 means anything else.

use clap::Parser;
use k6_action::{run_action, ActionArgs};
use k6_action_common::constants::return_code;
use k6_action_common::{logging, ActionConfig};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

fn main() -> ExitCode {
    let args = ActionArgs::parse();

    let env = |key: &str| std::env::var(key).ok();
    logging::init(args.debug || logging::is_debug_requested(env));
    let trace = logging::trace_writer(logging::is_github_actions(env));
    let config = ActionConfig::from_env();

    // Ctrl+C / SIGTERM interrupt the running k6 processes instead of
    // orphaning them.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
            tracing::warn!("Failed to install interrupt handler: {}", e);
        }
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            trace.error(&format!("Failed to build Tokio runtime: {e}"));
            return ExitCode::from(return_code::FAILURE as u8);
        }
    };

    tracing::debug!("Starting k6 action with {:?}", args);
    match runtime.block_on(run_action(&args, &config, trace.clone(), cancel)) {
        Ok(()) => ExitCode::from(return_code::SUCCESS as u8),
        Err(e) => {
            trace.error(&format!("{e:#}"));
            ExitCode::from(return_code::FAILURE as u8)
        }
    }
}
