use std::path::PathBuf;

use crate::error::ShellError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand a leading tilde against the home directory. Paths without
    /// one pass through untouched.
    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            None => Ok(PathBuf::from(path)),
            Some("") => dirs::home_dir().ok_or(ShellError::HomeDirNotFound),
            Some(rest) => match rest.strip_prefix('/') {
                Some(below) => {
                    let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                    Ok(home.join(below))
                }
                // "~user" lookup is not supported; leave it alone
                None => Ok(PathBuf::from(path)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path() {
        let expander = PathExpander::new();
        assert_eq!(
            expander.expand("/usr/bin").unwrap(),
            PathBuf::from("/usr/bin")
        );
        assert_eq!(
            expander.expand("relative/dir").unwrap(),
            PathBuf::from("relative/dir")
        );
    }

    #[test]
    fn test_expand_bare_tilde() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("~").unwrap(), dirs::home_dir().unwrap());
    }

    #[test]
    fn test_expand_tilde_subpath() {
        let expander = PathExpander::new();
        let expected = dirs::home_dir().unwrap().join("projects/vena");
        assert_eq!(expander.expand("~/projects/vena").unwrap(), expected);
    }

    #[test]
    fn test_expand_tilde_user_passthrough() {
        let expander = PathExpander::new();
        assert_eq!(
            expander.expand("~somebody/dir").unwrap(),
            PathBuf::from("~somebody/dir")
        );
    }
}
