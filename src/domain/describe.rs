/// Output of `git describe --tags`, e.g. `v1.2.3-4-gabc1234` or just `v1.2.3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescription {
    pub raw: String,
}

impl TagDescription {
    /// Create a description from query output, trimming surrounding whitespace
    pub fn new(raw: impl AsRef<str>) -> Self {
        TagDescription {
            raw: raw.as_ref().trim().to_string(),
        }
    }

    /// Everything before the first hyphen (the whole description when there is none)
    pub fn tag_prefix(&self) -> &str {
        match self.raw.split_once('-') {
            Some((prefix, _)) => prefix,
            None => &self.raw,
        }
    }

    /// Commits since the tag, when the `-<n>-g<hash>` suffix is present
    pub fn distance(&self) -> Option<u32> {
        self.suffix().map(|(distance, _)| distance)
    }

    /// Abbreviated commit hash without its `g` marker, when the suffix is present
    pub fn abbreviated_hash(&self) -> Option<&str> {
        self.suffix().map(|(_, hash)| hash)
    }

    /// Whether HEAD sits exactly on the described tag
    pub fn is_exact(&self) -> bool {
        self.suffix().is_none()
    }

    fn suffix(&self) -> Option<(u32, &str)> {
        let mut parts = self.raw.rsplitn(3, '-');
        let hash = parts.next()?.strip_prefix('g')?;
        let distance = parts.next()?.parse().ok()?;
        // a tag must remain in front of the suffix
        parts.next().filter(|tag| !tag.is_empty())?;

        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some((distance, hash))
    }
}

impl std::fmt::Display for TagDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
