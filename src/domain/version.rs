use super::describe::TagDescription;

/// Version reported to the build system, derived from a [`TagDescription`].
///
/// Takes the part of the description before the first hyphen and removes a single
/// leading `v` (e.g. "v2.3.1-4-gabc1234" -> "2.3.1").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    pub fn from_description(description: &TagDescription) -> Self {
        let prefix = description.tag_prefix();
        let version = prefix.strip_prefix('v').unwrap_or(prefix);
        VersionString(version.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&TagDescription> for VersionString {
    fn from(description: &TagDescription) -> Self {
        VersionString::from_description(description)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
