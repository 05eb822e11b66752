// Process-wide configuration read from the environment once at start-up.

use crate::constants::variables;

/// Environment driven settings consumed by the k6 helpers.
///
/// Construct it once with [`ActionConfig::from_env`] and pass it by reference;
/// tests build it with [`ActionConfig::from_lookup`] or struct literals
/// instead of touching the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionConfig {
    /// `GITHUB_WORKSPACE`: prefix stripped from script paths for display.
    pub workspace_root: Option<String>,
    /// `K6_CLOUD_TOKEN`: enables cloud execution when non-empty.
    pub cloud_token: Option<String>,
    /// `K6_CLOUD_PROJECT_ID`: required companion of the token.
    pub cloud_project_id: Option<String>,
}

impl ActionConfig {
    /// Read the configuration from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            workspace_root: lookup(variables::github::WORKSPACE),
            cloud_token: lookup(variables::k6::CLOUD_TOKEN),
            cloud_project_id: lookup(variables::k6::CLOUD_PROJECT_ID),
        }
    }

    /// The workspace root, or the empty string when unset.
    pub fn workspace_root(&self) -> &str {
        self.workspace_root.as_deref().unwrap_or("")
    }
}
