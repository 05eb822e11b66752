/// String utility functions for action inputs.
pub struct StringUtil;

impl StringUtil {
    /// Convert a string to a boolean.
    ///
    /// Valid true values: `"1"`, `"true"`, `"$true"` (case-insensitive).
    /// Valid false values: `"0"`, `"false"`, `"$false"` (case-insensitive).
    /// Surrounding whitespace is ignored. Returns `None` for anything else.
    pub fn convert_to_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "$true" => Some(true),
            "0" | "false" | "$false" => Some(false),
            _ => None,
        }
    }

    /// Like [`StringUtil::convert_to_bool`] but with an error message suitable
    /// for argument parsers.
    pub fn parse_bool(value: &str) -> Result<bool, String> {
        Self::convert_to_bool(value)
            .ok_or_else(|| format!("'{value}' is not a boolean (expected true or false)"))
    }

    /// True when `value` is present and is not the empty string.
    pub fn is_set(value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }
}
