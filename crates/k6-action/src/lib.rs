// k6-action: validation, command generation and execution of k6 load tests
// for CI workflows. The binary in `main.rs` is a thin wrapper over `driver`.

pub mod cloud;
pub mod command;
pub mod discovery;
pub mod driver;
pub mod executor;
pub mod inputs;
pub mod k6_cli;
pub mod script_path;
pub mod validation;

#[cfg(all(test, unix))]
pub(crate) mod test_support;

pub use cloud::is_cloud_integration_enabled;
pub use command::{generate_k6_run_command, k6_run_invocation, K6Invocation};
pub use driver::run_action;
pub use executor::{TestExecutor, TestOutcome, TestReport};
pub use inputs::ActionArgs;
pub use k6_cli::K6Cli;
pub use script_path::clean_script_path;
