use k6_action_common::constants::variables;
use k6_action_common::{ActionConfig, K6ActionError};
use k6_action_sdk::StringUtil;

/// Whether tests should be executed with k6 Cloud.
///
/// Cloud is enabled only when both `K6_CLOUD_TOKEN` and
/// `K6_CLOUD_PROJECT_ID` are non-empty. A token without a project id is a
/// configuration error.
pub fn is_cloud_integration_enabled(config: &ActionConfig) -> Result<bool, K6ActionError> {
    if !StringUtil::is_set(config.cloud_token.as_deref()) {
        return Ok(false);
    }

    if !StringUtil::is_set(config.cloud_project_id.as_deref()) {
        return Err(K6ActionError::configuration(format!(
            "{} must be set when {} is set",
            variables::k6::CLOUD_PROJECT_ID,
            variables::k6::CLOUD_TOKEN
        )));
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>, project: Option<&str>) -> ActionConfig {
        ActionConfig {
            cloud_token: token.map(str::to_string),
            cloud_project_id: project.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn disabled_without_token() {
        assert!(!is_cloud_integration_enabled(&config(None, None)).unwrap());
        assert!(!is_cloud_integration_enabled(&config(None, Some("123"))).unwrap());
        assert!(!is_cloud_integration_enabled(&config(Some(""), Some("123"))).unwrap());
    }

    #[test]
    fn token_without_project_is_configuration_error() {
        for project in [None, Some("")] {
            let err = is_cloud_integration_enabled(&config(Some("tkn"), project)).unwrap_err();
            assert!(matches!(err, K6ActionError::Configuration { .. }));
            assert_eq!(
                err.to_string(),
                "K6_CLOUD_PROJECT_ID must be set when K6_CLOUD_TOKEN is set"
            );
        }
    }

    #[test]
    fn enabled_with_token_and_project() {
        assert!(is_cloud_integration_enabled(&config(Some("tkn"), Some("123"))).unwrap());
    }
}
