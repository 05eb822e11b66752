// Constants shared by the action crates: environment variable names, the
// k6 command line vocabulary and process return codes.

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

pub mod variables {
    pub mod github {
        pub const ACTIONS: &str = "GITHUB_ACTIONS";
        pub const WORKSPACE: &str = "GITHUB_WORKSPACE";
    }

    pub mod actions {
        pub const RUNNER_DEBUG: &str = "ACTIONS_RUNNER_DEBUG";
        pub const STEP_DEBUG: &str = "ACTIONS_STEP_DEBUG";
    }

    pub mod k6 {
        pub const BINARY: &str = "K6_BINARY";
        pub const CLOUD_TOKEN: &str = "K6_CLOUD_TOKEN";
        pub const CLOUD_PROJECT_ID: &str = "K6_CLOUD_PROJECT_ID";
    }
}

// ---------------------------------------------------------------------------
// k6 command line
// ---------------------------------------------------------------------------

pub mod k6 {
    /// Executable name looked up on PATH.
    pub const EXECUTABLE: &str = "k6";

    /// Subcommand executing the test on the local machine.
    pub const RUN_SUBCOMMAND: &str = "run";
    /// Subcommand executing the test in k6 Cloud.
    pub const CLOUD_SUBCOMMAND: &str = "cloud";

    /// Fixed leading arguments of an inspection invocation.
    pub const INSPECT_ARGS: &[&str] = &["inspect", "--execution-requirements"];

    /// Empty REST API address. Always passed, before the user flags.
    pub const ADDRESS_ARG: &str = "--address=";
    /// Streams local run results to k6 Cloud.
    pub const CLOUD_OUTPUT_ARG: &str = "--out=cloud";
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub mod messages {
    pub const VALIDATING: &str = "🔍 Validating test run files.";
    pub const GENERATED_COMMAND_PREFIX: &str = "🤖 Generated command: ";
}

// ---------------------------------------------------------------------------
// ReturnCode
// ---------------------------------------------------------------------------

pub mod return_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
