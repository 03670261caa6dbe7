//! Absolute path values.

use crate::error::PathError;
use std::{borrow::Borrow, fmt, str::FromStr};

/// An absolute URL path, the routing key.
///
/// A `Path` always starts with `/` and never contains control characters.
/// No normalization is applied: `/users` and `/users/` are different paths,
/// and comparison is case-sensitive.
///
/// # Example
///
/// ```rust
/// use wayline_core::Path;
///
/// let path = Path::parse("/users/42").unwrap();
/// assert_eq!(path, "/users/42");
/// assert!(Path::parse("users").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(String);

impl Path {
    /// Validates `raw` and wraps it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, PathError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(PathError::NotAbsolute(raw));
        }
        if raw.chars().any(char::is_control) {
            return Err(PathError::InvalidCharacter(raw));
        }
        Ok(Self(raw))
    }

    /// The root path, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the path into its `/`-separated segments.
    ///
    /// The leading slash is skipped, so `/` yields a single empty segment and
    /// `/users/` yields `["users", ""]`.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.0[1..].split('/')
    }

    /// Consumes the path, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Path::parse("/").unwrap().as_str(), "/");
        assert_eq!(Path::parse("/a/b/").unwrap().as_str(), "/a/b/");
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(Path::parse(""), Err(PathError::Empty));
        assert_eq!(
            Path::parse("about"),
            Err(PathError::NotAbsolute("about".to_string()))
        );
        assert!(matches!(
            Path::parse("/a\nb"),
            Err(PathError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_no_normalization() {
        let a = Path::parse("/users").unwrap();
        let b = Path::parse("/users/").unwrap();
        let c = Path::parse("/Users").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_segments() {
        let root = Path::root();
        assert_eq!(root.segments().collect::<Vec<_>>(), vec![""]);

        let nested = Path::parse("/users/42/").unwrap();
        assert_eq!(nested.segments().collect::<Vec<_>>(), vec!["users", "42", ""]);
    }
}
