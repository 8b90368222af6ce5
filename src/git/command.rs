use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::Config;
use crate::domain::TagDescription;
use crate::error::{Result, StatusError};
use crate::git::Repository;

const DESCRIBE_ARGS: &[&str] = &["describe", "--tags"];
const REV_PARSE_ARGS: &[&str] = &["rev-parse", "HEAD"];

/// Runs the queries through the `git` executable.
///
/// Stdout is captured and trimmed; stderr is inherited so git's own
/// diagnostics reach the user unchanged.
pub struct GitCommand {
    config: Config,
}

impl GitCommand {
    pub fn new(config: &Config) -> Self {
        GitCommand {
            config: config.clone(),
        }
    }

    /// Runs git with `args` and returns its trimmed stdout.
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed stdout of a zero exit
    /// * `Err(StatusError::QueryFailed)` - Non-zero exit or killed by a signal
    /// * `Err(StatusError::Io)` - The program could not be spawned
    pub fn run_query(&self, args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.config.git_program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.config.work_dir {
            command.current_dir(dir);
        }

        debug!(
            "Running {} {} in {}",
            self.config.git_program.display(),
            args.join(" "),
            self.config
                .work_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| ".".to_string())
        );

        let output = command.output()?;
        if !output.status.success() {
            let command_line = self.command_line(args);
            warn!("{} exited with {}", command_line, output.status);
            return Err(StatusError::query_failed(command_line, output.status.code()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = self.config.git_program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        GitCommand::new(&Config::default())
    }
}

impl Repository for GitCommand {
    fn describe_tags(&self) -> Result<TagDescription> {
        let description = TagDescription::new(self.run_query(DESCRIBE_ARGS)?);
        debug!(
            "Described HEAD as {} (tag prefix {}, exact {}, distance {:?}, hash {:?})",
            description,
            description.tag_prefix(),
            description.is_exact(),
            description.distance(),
            description.abbreviated_hash()
        );
        Ok(description)
    }

    fn head_revision(&self) -> Result<String> {
        self.run_query(REV_PARSE_ARGS)
    }
}
