use std::path::PathBuf;

/// Settings for running the version-control queries.
///
/// Only ever built from code; the binary always uses [`Config::default`], which runs `git`
/// from `PATH` in the current working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub git_program: PathBuf,

    /// Directory the queries run in. `None` inherits the process working directory.
    pub work_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            git_program: PathBuf::from("git"),
            work_dir: None,
        }
    }
}

impl Config {
    /// Returns a config that runs the default git program inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Config {
            work_dir: Some(dir.into()),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.git_program, PathBuf::from("git"));
        assert_eq!(config.work_dir, None);
    }

    #[test]
    fn test_in_dir_keeps_default_program() {
        let config = Config::in_dir("/tmp/checkout");
        assert_eq!(config.git_program, PathBuf::from("git"));
        assert_eq!(config.work_dir, Some(PathBuf::from("/tmp/checkout")));
    }
}
