use k6_action_common::K6ActionError;
use std::collections::HashSet;

const GLOB_METACHARACTERS: &[char] = &['*', '?', '['];

/// Expand test path patterns into script paths.
///
/// Patterns with glob metacharacters are expanded against the file system
/// (directories are ignored); plain paths are kept as given, even if they do
/// not exist, so validation can reject them. Duplicates are dropped keeping
/// the first occurrence.
pub fn find_test_paths(patterns: &[String]) -> Result<Vec<String>, K6ActionError> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for pattern in patterns {
        for path in expand(pattern)? {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    tracing::debug!("Found {} test path(s) for {} pattern(s)", paths.len(), patterns.len());
    Ok(paths)
}

fn expand(pattern: &str) -> Result<Vec<String>, K6ActionError> {
    if !pattern.contains(GLOB_METACHARACTERS) {
        return Ok(vec![pattern.to_string()]);
    }

    let entries = glob::glob(pattern).map_err(|e| K6ActionError::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    Ok(entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable path while expanding '{}': {}", pattern, e);
                None
            }
        })
        .filter(|path| path.is_file())
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn expands_globs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        fs::create_dir(dir.path().join("tests/nested.js")).unwrap();
        for name in ["b.js", "a.js", "readme.md"] {
            fs::write(dir.path().join("tests").join(name), "").unwrap();
        }

        let pattern = format!("{}/tests/*.js", dir.path().display());
        let found = find_test_paths(&[pattern]).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.rsplit('/').next().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.js", "b.js"]);
    }

    #[test]
    fn keeps_literal_paths() {
        let found = find_test_paths(&["does/not/exist.js".to_string()]).unwrap();
        assert_eq!(found, vec!["does/not/exist.js"]);
    }

    #[test]
    fn removes_duplicates_preserving_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.js");
        fs::write(&a, "").unwrap();
        let a = a.to_string_lossy().into_owned();

        let found = find_test_paths(&[
            "z.js".to_string(),
            a.clone(),
            format!("{}/*.js", dir.path().display()),
            "z.js".to_string(),
        ])
        .unwrap();
        assert_eq!(found, vec!["z.js".to_string(), a]);
    }

    #[test]
    fn unmatched_glob_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_test_paths(&[format!("{}/*.js", dir.path().display())]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn invalid_pattern_is_error() {
        let err = find_test_paths(&["tests/[.js".to_string()]).unwrap_err();
        assert!(matches!(err, K6ActionError::Pattern { .. }));
    }
}
