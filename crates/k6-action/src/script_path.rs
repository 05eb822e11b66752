use k6_action_common::ActionConfig;

/// Remove the workspace root from `script_path` for display and trim
/// surrounding whitespace.
///
/// Only the first occurrence is removed, wherever it appears in the string.
/// An unset workspace root leaves the path untouched.
pub fn clean_script_path(script_path: &str, config: &ActionConfig) -> String {
    script_path
        .replacen(config.workspace_root(), "", 1)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(root: &str) -> ActionConfig {
        ActionConfig {
            workspace_root: Some(root.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn strips_workspace_root() {
        let cfg = config("/home/runner/work/repo");
        assert_eq!(
            clean_script_path("/home/runner/work/repo/script.js", &cfg),
            "/script.js"
        );
    }

    #[test]
    fn unset_root_only_trims() {
        let cfg = ActionConfig::default();
        assert_eq!(clean_script_path("  tests/a.js \n", &cfg), "tests/a.js");
    }

    #[test]
    fn removes_first_occurrence_anywhere() {
        let cfg = config("/ws");
        assert_eq!(clean_script_path("./ws/ws/a.js", &cfg), "./ws/a.js");
        assert_eq!(clean_script_path("x/ws/a.js", &cfg), "x/a.js");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let cfg = config("/home/runner/work/repo");
        let once = clean_script_path(" /home/runner/work/repo/tests/load.js ", &cfg);
        assert_eq!(clean_script_path(&once, &cfg), once);
    }
}
