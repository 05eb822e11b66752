// k6-action-sdk: Foundation layer for the k6 action.
// This crate has ZERO dependencies on other workspace crates and provides
// the trace, process and argument utilities the action is built from.

pub mod arg_util;
pub mod process_invoker;
pub mod string_util;
pub mod trace;
pub mod which_util;

// Re-export commonly used items at crate root
pub use arg_util::ArgUtil;
pub use process_invoker::{
    OutputMode, ProcessCancelledError, ProcessInvoker, ProcessLaunchError,
};
pub use string_util::StringUtil;
pub use trace::TraceWriter;
pub use which_util::WhichUtil;
