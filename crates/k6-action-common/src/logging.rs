// Diagnostic logging set-up and the choice of user facing trace writer.

use crate::action_command::ActionsTraceWriter;
use crate::constants::variables;
use k6_action_sdk::trace::TracingTraceWriter;
use k6_action_sdk::{StringUtil, TraceWriter};
use std::sync::Arc;

/// True when the runner asked for step or runner debug output.
pub fn is_debug_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    [variables::actions::STEP_DEBUG, variables::actions::RUNNER_DEBUG]
        .into_iter()
        .filter_map(|key| lookup(key))
        .any(|value| StringUtil::convert_to_bool(&value) == Some(true))
}

/// True when running inside a GitHub Actions job.
pub fn is_github_actions<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(variables::github::ACTIONS)
        .and_then(|v| StringUtil::convert_to_bool(&v))
        .unwrap_or(false)
}

/// Install the `tracing` subscriber. Diagnostics go to stderr so they never
/// interleave with workflow commands on stdout.
pub fn init(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Pick the user facing trace writer for the current environment.
pub fn trace_writer(github_actions: bool) -> Arc<dyn TraceWriter> {
    if github_actions {
        Arc::new(ActionsTraceWriter)
    } else {
        Arc::new(TracingTraceWriter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn debug_from_step_debug() {
        assert!(is_debug_requested(lookup(&[("ACTIONS_STEP_DEBUG", "true")])));
    }

    #[test]
    fn debug_from_runner_debug() {
        assert!(is_debug_requested(lookup(&[("ACTIONS_RUNNER_DEBUG", "1")])));
    }

    #[test]
    fn debug_off_by_default() {
        assert!(!is_debug_requested(lookup(&[])));
        assert!(!is_debug_requested(lookup(&[("ACTIONS_STEP_DEBUG", "false")])));
    }

    #[test]
    fn detects_github_actions() {
        assert!(is_github_actions(lookup(&[("GITHUB_ACTIONS", "true")])));
        assert!(!is_github_actions(lookup(&[])));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
