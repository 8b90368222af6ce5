//! Version-control query abstraction layer
//!
//! The status report needs exactly two answers from version control: the
//! nearest tag description and the full HEAD revision. The [Repository] trait
//! names those two queries so the report can run against either:
//!
//! - [command::GitCommand]: shells out to the `git` executable
//! - [mock::MockRepository]: canned answers for testing
//!
//! ```rust
//! # use workspace_status::git::{MockRepository, Repository};
//! let repo = MockRepository::new()
//!     .with_description("v1.2.3")
//!     .with_revision("0123456789abcdef");
//! assert_eq!(repo.describe_tags().unwrap().tag_prefix(), "v1.2.3");
//! ```

pub mod command;
pub mod mock;

pub use command::GitCommand;
pub use mock::MockRepository;

use crate::domain::TagDescription;
use crate::error::Result;

/// The two version-control queries behind a status report
///
/// Both queries block until the underlying tool finishes. A tool that exits
/// non-zero is reported as [crate::error::StatusError::QueryFailed]; nothing
/// here terminates the process.
pub trait Repository {
    /// Describe HEAD via the nearest reachable tag (`git describe --tags`)
    ///
    /// # Returns
    /// * `Ok(TagDescription)` - `<tag>` or `<tag>-<n>-g<hash>`, trimmed
    /// * `Err` - No tags, not a repository, or the tool could not run
    fn describe_tags(&self) -> Result<TagDescription>;

    /// Full commit identifier of HEAD (`git rev-parse HEAD`), trimmed
    fn head_revision(&self) -> Result<String>;
}

