use clap::{ArgAction, Parser};
use k6_action_sdk::StringUtil;
use std::path::PathBuf;

/// Action inputs. Every option falls back to the `INPUT_<NAME>` variable the
/// workflow runner exports for `with:` entries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "k6-action", about = "Validate and run k6 load tests in CI", version)]
pub struct ActionArgs {
    /// Test script paths or glob patterns, separated by newlines or commas.
    #[arg(long, env = "INPUT_PATH")]
    pub path: String,

    /// Flags passed to `k6 run` / `k6 cloud`, separated by single spaces.
    #[arg(long, env = "INPUT_FLAGS", default_value = "", allow_hyphen_values = true)]
    pub flags: String,

    /// Flags passed to `k6 inspect`, separated by single spaces.
    #[arg(
        long = "inspect-flags",
        env = "INPUT_INSPECT-FLAGS",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub inspect_flags: String,

    /// Run all tests at the same time.
    #[arg(
        long,
        env = "INPUT_PARALLEL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = StringUtil::parse_bool
    )]
    pub parallel: bool,

    /// Stop after the first failing test.
    #[arg(
        long = "fail-fast",
        env = "INPUT_FAIL-FAST",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = StringUtil::parse_bool
    )]
    pub fail_fast: bool,

    /// With k6 Cloud credentials, run locally and stream results to the cloud
    /// instead of executing in the cloud.
    #[arg(
        long = "cloud-run-locally",
        env = "INPUT_CLOUD-RUN-LOCALLY",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "true",
        default_missing_value = "true",
        value_parser = StringUtil::parse_bool
    )]
    pub cloud_run_locally: bool,

    /// Only validate the scripts, do not run them.
    #[arg(
        long = "only-verify-scripts",
        env = "INPUT_ONLY-VERIFY-SCRIPTS",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = StringUtil::parse_bool
    )]
    pub only_verify_scripts: bool,

    /// Enable debug logging.
    #[arg(
        long,
        env = "INPUT_DEBUG",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = StringUtil::parse_bool
    )]
    pub debug: bool,

    /// Path to the k6 executable. Defaults to `k6` on PATH.
    #[arg(long = "k6-binary", env = "K6_BINARY")]
    pub k6_binary: Option<PathBuf>,
}
