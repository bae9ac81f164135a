//! Base URL type.
//!
//! The base URL is the externally visible root address the service
//! advertises for itself. Candidates are parsed with the `url` crate, but
//! the accepted text is kept as the caller wrote it (minus surrounding
//! whitespace) so that a value reads back exactly as it was set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// A well-formed absolute URL with a scheme and an authority.
///
/// # Examples
///
/// ```
/// use srvconf::BaseUrl;
///
/// let url = BaseUrl::parse("https://example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com");
///
/// assert!(BaseUrl::parse("").is_err());
/// assert!(BaseUrl::parse("not-a-url").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Longest accepted candidate, in bytes.
    pub const MAX_LEN: usize = 2048;

    /// Parse and validate a candidate base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate is empty, too long, not an
    /// absolute URL, or lacks a host.
    pub fn parse(candidate: &str) -> Result<Self, InvalidBaseUrlError> {
        let trimmed = candidate.trim();
        let reject = |reason: String| InvalidBaseUrlError {
            value: candidate.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(reject("base URL cannot be empty".into()));
        }

        if trimmed.len() > Self::MAX_LEN {
            return Err(reject(format!(
                "base URL cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }

        let url = Url::parse(trimmed).map_err(|e| reject(format!("not an absolute URL: {e}")))?;

        // The parser supplies a host for special schemes written without
        // `//`, so the authority marker is checked on the text itself.
        let scheme = url.scheme();
        let has_authority_marker = trimmed
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && trimmed
                .get(scheme.len()..)
                .is_some_and(|rest| rest.starts_with("://"));

        if !has_authority_marker
            || url.cannot_be_a_base()
            || url.host_str().map_or(true, str::is_empty)
        {
            return Err(reject("URL must include a scheme and an authority".into()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the URL text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for BaseUrl {
    type Err = InvalidBaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = InvalidBaseUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BaseUrl> for String {
    fn from(url: BaseUrl) -> Self {
        url.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for rejected base URL candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBaseUrlError {
    /// The candidate as supplied.
    pub value: String,
    /// The reason the candidate was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidBaseUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid base URL '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidBaseUrlError {}
