// k6-action-common: Shared services for the k6 action.
// Depends on `k6-action-sdk` and is consumed by the action binary.

pub mod action_command;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// ---------------------------------------------------------------------------
// Re-exports for convenient access
// ---------------------------------------------------------------------------

pub use action_command::{ActionCommand, ActionsTraceWriter};
pub use config::ActionConfig;
pub use error::K6ActionError;
