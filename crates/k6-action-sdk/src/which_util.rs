use std::path::{Path, PathBuf};

/// Which-utility for locating executables on PATH.
pub struct WhichUtil;

impl WhichUtil {
    /// Locate `command` on the system PATH.
    ///
    /// A command containing a path separator is checked as-is instead of
    /// being searched for.
    /// - If `require` is true and the command is not found, returns an error.
    /// - If `require` is false and the command is not found, returns `Ok(None)`.
    pub fn which(command: &str, require: bool) -> anyhow::Result<Option<PathBuf>> {
        if command.is_empty() {
            if require {
                anyhow::bail!("command must not be empty");
            }
            return Ok(None);
        }

        let found = if Path::new(command).components().count() > 1 {
            let path = PathBuf::from(command);
            path.is_file().then_some(path)
        } else {
            which::which(command).ok()
        };

        match found {
            Some(path) => {
                tracing::debug!("Located '{}' at '{}'", command, path.display());
                Ok(Some(path))
            }
            None if require => anyhow::bail!(
                "{command}: command not found. Make sure '{command}' is installed and its location included in the 'PATH' environment variable."
            ),
            None => Ok(None),
        }
    }
}
