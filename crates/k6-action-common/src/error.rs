// Error taxonomy of the action.

/// Errors surfaced by the k6 helpers and the action driver.
#[derive(Debug, thiserror::Error)]
pub enum K6ActionError {
    /// Validation was asked to check an empty set of paths.
    #[error("No test files found")]
    NoInput,

    /// The environment is inconsistent; nothing should be run.
    #[error("{message}")]
    Configuration { message: String },

    /// The inspection process for a single path could not be started.
    #[error("Failed to launch k6 for '{path}': {reason}")]
    Launch { path: String, reason: String },

    /// The k6 executable is not available.
    #[error("k6 executable not found: {reason}")]
    K6NotFound { reason: String },

    /// A test path pattern could not be parsed.
    #[error("Invalid test path pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Some discovered scripts did not pass `k6 inspect`.
    #[error("Not all test files are valid: {}", paths.join(", "))]
    InvalidScripts { paths: Vec<String> },

    /// At least one test did not pass.
    #[error("{failed} of {total} test(s) failed")]
    TestsFailed { failed: usize, total: usize },
}

impl K6ActionError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
