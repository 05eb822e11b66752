// Workflow commands (`::command key=value::data`) understood by the GitHub
// Actions runner, and a trace writer that speaks them.

use k6_action_sdk::TraceWriter;
use std::collections::BTreeMap;
use std::fmt;

/// The workflow command delimiter (`::`) used both as prefix and as separator.
pub const COMMAND_KEY: &str = "::";

struct EscapeMapping {
    token: &'static str,
    replacement: &'static str,
}

// `%` must be escaped first so later replacements are not double-encoded.
const ESCAPE_DATA_MAPPINGS: &[EscapeMapping] = &[
    EscapeMapping { token: "%",  replacement: "%25" },
    EscapeMapping { token: "\r", replacement: "%0D" },
    EscapeMapping { token: "\n", replacement: "%0A" },
];

const ESCAPE_PROPERTY_MAPPINGS: &[EscapeMapping] = &[
    EscapeMapping { token: "%",  replacement: "%25" },
    EscapeMapping { token: "\r", replacement: "%0D" },
    EscapeMapping { token: "\n", replacement: "%0A" },
    EscapeMapping { token: ":",  replacement: "%3A" },
    EscapeMapping { token: ",",  replacement: "%2C" },
];

fn escape(value: &str, mappings: &[EscapeMapping]) -> String {
    mappings
        .iter()
        .fold(value.to_string(), |acc, m| acc.replace(m.token, m.replacement))
}

/// A workflow command ready to be written to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCommand {
    /// The command name (e.g. "debug", "error", "group").
    pub command: String,
    /// Properties, rendered in key order.
    pub properties: BTreeMap<String, String>,
    /// The command body.
    pub data: String,
}

impl ActionCommand {
    pub fn new(command: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            properties: BTreeMap::new(),
            data: data.into(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn escape_data(value: &str) -> String {
        escape(value, ESCAPE_DATA_MAPPINGS)
    }

    pub fn escape_property(value: &str) -> String {
        escape(value, ESCAPE_PROPERTY_MAPPINGS)
    }
}

impl fmt::Display for ActionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_KEY}{}", self.command)?;
        let mut separator = " ";
        for (key, value) in &self.properties {
            write!(f, "{separator}{key}={}", Self::escape_property(value))?;
            separator = ",";
        }
        write!(f, "{COMMAND_KEY}{}", Self::escape_data(&self.data))
    }
}

/// Writes trace output to stdout as workflow commands, so the runner renders
/// debug lines, annotations and collapsible groups.
#[derive(Debug, Clone, Default)]
pub struct ActionsTraceWriter;

impl ActionsTraceWriter {
    /// Render the workflow command for `command` carrying `message`.
    pub fn format(command: &str, message: &str) -> String {
        ActionCommand::new(command, message).to_string()
    }
}

impl TraceWriter for ActionsTraceWriter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn debug(&self, message: &str) {
        println!("{}", Self::format("debug", message));
    }

    fn warning(&self, message: &str) {
        println!("{}", Self::format("warning", message));
    }

    fn error(&self, message: &str) {
        println!("{}", Self::format("error", message));
    }

    fn group(&self, title: &str) {
        println!("{}", Self::format("group", title));
    }

    fn end_group(&self) {
        println!("{}", Self::format("endgroup", ""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_command() {
        assert_eq!(
            ActionCommand::new("debug", "🤖 Generated command: k6 run --address= a.js").to_string(),
            "::debug::🤖 Generated command: k6 run --address= a.js"
        );
    }

    #[test]
    fn renders_properties_in_key_order() {
        let cmd = ActionCommand::new("error", "boom")
            .with_property("line", "3")
            .with_property("file", "tests/a.js");
        assert_eq!(cmd.to_string(), "::error file=tests/a.js,line=3::boom");
    }

    #[test]
    fn escapes_data() {
        assert_eq!(ActionCommand::escape_data("50%\r\nnext"), "50%25%0D%0Anext");
    }

    #[test]
    fn escapes_property() {
        assert_eq!(ActionCommand::escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn multiline_error_stays_on_one_line() {
        let line = ActionsTraceWriter::format("error", "first\nsecond");
        assert_eq!(line, "::error::first%0Asecond");
    }

    #[test]
    fn end_group_has_no_data() {
        assert_eq!(ActionsTraceWriter::format("endgroup", ""), "::endgroup::");
    }
}
