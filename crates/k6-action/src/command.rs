use k6_action_common::constants::{k6, messages};
use k6_action_sdk::{ArgUtil, TraceWriter};
use std::fmt;

/// A k6 command line in structured form.
///
/// `args` starts with the subcommand (`run` or `cloud`); rendering with
/// `Display` gives the exact command string shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct K6Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl K6Invocation {
    /// Build the invocation for running `path`.
    ///
    /// | cloud | run locally | command                     |
    /// |-------|-------------|-----------------------------|
    /// | yes   | yes         | `k6 run ... --out=cloud`    |
    /// | yes   | no          | `k6 cloud ...`              |
    /// | no    | -           | `k6 run ...`                |
    pub fn build(path: &str, flags: &str, is_cloud: bool, cloud_run_locally: bool) -> Self {
        let subcommand = if is_cloud && !cloud_run_locally {
            k6::CLOUD_SUBCOMMAND
        } else {
            k6::RUN_SUBCOMMAND
        };

        let mut args = vec![subcommand.to_string(), k6::ADDRESS_ARG.to_string()];
        args.extend(ArgUtil::split_flags(flags));
        if is_cloud && cloud_run_locally {
            args.push(k6::CLOUD_OUTPUT_ARG.to_string());
        }
        args.push(path.to_string());

        Self {
            program: k6::EXECUTABLE.to_string(),
            args,
        }
    }
}

impl fmt::Display for K6Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// Build the invocation for the test at `path` and trace the resulting
/// command line at debug level. Nothing is executed.
pub fn k6_run_invocation(
    path: &str,
    flags: &str,
    is_cloud: bool,
    cloud_run_locally: bool,
    trace: &dyn TraceWriter,
) -> K6Invocation {
    let invocation = K6Invocation::build(path, flags, is_cloud, cloud_run_locally);
    trace.debug(&format!("{}{invocation}", messages::GENERATED_COMMAND_PREFIX));
    invocation
}

/// Generate the command line for running the test at `path`.
pub fn generate_k6_run_command(
    path: &str,
    flags: &str,
    is_cloud: bool,
    cloud_run_locally: bool,
    trace: &dyn TraceWriter,
) -> String {
    k6_run_invocation(path, flags, is_cloud, cloud_run_locally, trace).to_string()
}
