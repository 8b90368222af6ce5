//! Workspace status line protocol
//!
//! Writes `KEY value` lines in a fixed order: both version keys first, then
//! the revision. The revision query only runs after the version lines are
//! flushed, so a failing second query leaves those lines on the output.

use std::fmt;
use std::io::Write;

use log::debug;

use crate::domain::VersionString;
use crate::error::Result;
use crate::git::Repository;

/// Keys emitted in the status report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    /// Stable version key; changing it invalidates cached build outputs
    StableBuildVersion,
    /// Same value as `StableBuildVersion`, under the name some build rules read
    BuildScmVersion,
    StableBuildScmRevision,
}

impl StatusKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::StableBuildVersion => "STABLE_buildVersion",
            StatusKey::BuildScmVersion => "BUILD_SCM_VERSION",
            StatusKey::StableBuildScmRevision => "STABLE_buildScmRevision",
        }
    }

    /// Whether the build system treats this key as stable
    pub fn is_stable(&self) -> bool {
        self.as_str().starts_with("STABLE_")
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `KEY value` line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub key: StatusKey,
    pub value: String,
}

impl StatusLine {
    pub fn new(key: StatusKey, value: impl Into<String>) -> Self {
        StatusLine {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

/// Lines reporting `version`, in output order
pub fn version_lines(version: &VersionString) -> [StatusLine; 2] {
    [
        StatusLine::new(StatusKey::StableBuildVersion, version.as_str()),
        StatusLine::new(StatusKey::BuildScmVersion, version.as_str()),
    ]
}

/// Runs both queries against `repo` and writes the report to `out`.
///
/// # Returns
/// * `Ok(())` - All three lines written and flushed
/// * `Err` - A query failed or `out` could not be written. Nothing is written
///   when the describe query fails; the version lines remain when the
///   revision query fails.
pub fn write_status<R, W>(repo: &R, out: &mut W) -> Result<()>
where
    R: Repository + ?Sized,
    W: Write + ?Sized,
{
    let description = repo.describe_tags()?;
    let version = VersionString::from_description(&description);
    for line in version_lines(&version) {
        write_line(&mut *out, &line)?;
    }
    out.flush()?;

    let revision = repo.head_revision()?;
    write_line(
        &mut *out,
        &StatusLine::new(StatusKey::StableBuildScmRevision, revision),
    )?;
    out.flush()?;

    Ok(())
}

fn write_line<W: Write + ?Sized>(out: &mut W, line: &StatusLine) -> Result<()> {
    debug!(
        "Writing {} key {}",
        if line.key.is_stable() { "stable" } else { "volatile" },
        line.key
    );
    writeln!(out, "{}", line)?;
    Ok(())
}
