use crate::domain::TagDescription;
use crate::error::{Result, StatusError};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without running git
///
/// A query with no configured answer fails the way git does outside a
/// repository (exit status 128).
#[derive(Debug, Default)]
pub struct MockRepository {
    description: Option<String>,
    revision: Option<String>,
    calls: RefCell<Vec<&'static str>>,
}

impl MockRepository {
    /// Create a mock where both queries fail
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the describe query with `description`
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Answer the revision query with `revision`
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Queries issued so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, query: &'static str) {
        self.calls.borrow_mut().push(query);
    }
}

impl Repository for MockRepository {
    fn describe_tags(&self) -> Result<TagDescription> {
        self.record("describe");
        self.description
            .as_deref()
            .map(TagDescription::new)
            .ok_or_else(|| StatusError::query_failed("git describe --tags", Some(128)))
    }

    fn head_revision(&self) -> Result<String> {
        self.record("rev-parse");
        self.revision
            .as_deref()
            .map(|revision| revision.trim().to_string())
            .ok_or_else(|| StatusError::query_failed("git rev-parse HEAD", Some(128)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_answers() {
        let repo = MockRepository::new()
            .with_description("v1.0.0-2-gabc1234\n")
            .with_revision("abc1234def\n");

        assert_eq!(repo.describe_tags().unwrap().raw, "v1.0.0-2-gabc1234");
        assert_eq!(repo.head_revision().unwrap(), "abc1234def");
    }

    #[test]
    fn test_mock_repository_default_fails() {
        let repo = MockRepository::default();

        assert!(matches!(
            repo.describe_tags(),
            Err(StatusError::QueryFailed { code: Some(128), .. })
        ));
        assert!(repo.head_revision().is_err());
    }

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new().with_description("v1");
        let _ = repo.describe_tags();
        let _ = repo.head_revision();

        assert_eq!(repo.calls(), vec!["describe", "rev-parse"]);
    }
}
