/// Argument utilities for flag strings supplied through action inputs.
pub struct ArgUtil;

impl ArgUtil {
    /// Tokenize a user supplied flag string into arguments.
    ///
    /// The string is split on every single space and the pieces are kept in
    /// order, so `"--vus  10"` yields an empty token between the two flags.
    /// Quoting is not interpreted. An empty string yields no tokens.
    pub fn split_flags(flags: &str) -> Vec<String> {
        if flags.is_empty() {
            return Vec::new();
        }
        flags.split(' ').map(str::to_string).collect()
    }

    /// Split a multi-value input on newlines and commas, trimming every entry
    /// and dropping the empty ones.
    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(['\n', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
