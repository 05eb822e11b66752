/// Trace / logging abstraction used by every layer of the action.
///
/// Messages either end up in the workflow log (via workflow commands) or in
/// the `tracing` subscriber, depending on which writer the binary installs.
pub trait TraceWriter: Send + Sync {
    /// Log an informational message. Always visible to the operator.
    fn info(&self, message: &str);

    /// Log a debug message. Only visible when step debugging is enabled.
    fn debug(&self, message: &str);

    /// Log a warning message.
    fn warning(&self, message: &str) {
        self.info(&format!("Warning: {message}"));
    }

    /// Log an error message.
    fn error(&self, message: &str) {
        self.info(&format!("Error: {message}"));
    }

    /// Start a collapsible output group.
    fn group(&self, title: &str) {
        self.info(title);
    }

    /// Close the group opened by the last `group` call.
    fn end_group(&self) {}
}

/// Forwards everything to the `tracing` crate at the matching level.
#[derive(Debug, Clone)]
pub struct TracingTraceWriter;

impl TraceWriter for TracingTraceWriter {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn group(&self, title: &str) {
        tracing::info!("▶ {}", title);
    }
}

/// A no-op trace writer that discards all messages. Useful for tests.
#[derive(Debug, Clone)]
pub struct NullTraceWriter;

impl TraceWriter for NullTraceWriter {
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn group(&self, _title: &str) {}
}

/// The level of a collected trace message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLevel {
    Info,
    Debug,
    Warning,
    Error,
    Group,
    EndGroup,
}

/// A trace writer that collects all messages into a `Vec`.
#[derive(Debug, Default)]
pub struct CollectingTraceWriter {
    messages: parking_lot::Mutex<Vec<(TraceLevel, String)>>,
}

impl CollectingTraceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all collected messages.
    pub fn messages(&self) -> Vec<(TraceLevel, String)> {
        self.messages.lock().clone()
    }

    /// Return the collected messages of a single level, in order.
    pub fn messages_at(&self, level: TraceLevel) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: TraceLevel, message: &str) {
        self.messages.lock().push((level, message.to_string()));
    }
}

impl TraceWriter for CollectingTraceWriter {
    fn info(&self, message: &str) {
        self.push(TraceLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.push(TraceLevel::Debug, message);
    }

    fn warning(&self, message: &str) {
        self.push(TraceLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(TraceLevel::Error, message);
    }

    fn group(&self, title: &str) {
        self.push(TraceLevel::Group, title);
    }

    fn end_group(&self) {
        self.push(TraceLevel::EndGroup, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_writer() {
        let writer = CollectingTraceWriter::new();
        writer.info("hello");
        writer.warning("warn");
        writer.error("err");
        writer.debug("dbg");
        writer.group("section");
        writer.end_group();
        let msgs = writer.messages();
        assert_eq!(msgs.len(), 6);
        assert_eq!(msgs[0], (TraceLevel::Info, "hello".into()));
        assert_eq!(msgs[1], (TraceLevel::Warning, "warn".into()));
        assert_eq!(msgs[2], (TraceLevel::Error, "err".into()));
        assert_eq!(msgs[3], (TraceLevel::Debug, "dbg".into()));
        assert_eq!(msgs[4], (TraceLevel::Group, "section".into()));
        assert_eq!(msgs[5], (TraceLevel::EndGroup, String::new()));
    }

    #[test]
    fn messages_at_filters_by_level() {
        let writer = CollectingTraceWriter::new();
        writer.debug("one");
        writer.info("skip");
        writer.debug("two");
        assert_eq!(writer.messages_at(TraceLevel::Debug), vec!["one", "two"]);
    }

    struct PlainWriter(CollectingTraceWriter);

    impl TraceWriter for PlainWriter {
        fn info(&self, message: &str) {
            self.0.info(message);
        }

        fn debug(&self, _message: &str) {}
    }

    #[test]
    fn default_methods_fall_back_to_info() {
        let writer = PlainWriter(CollectingTraceWriter::new());
        writer.warning("careful");
        writer.error("broken");
        writer.group("title");
        writer.end_group();
        assert_eq!(
            writer.0.messages_at(TraceLevel::Info),
            vec!["Warning: careful", "Error: broken", "title"]
        );
    }
}
