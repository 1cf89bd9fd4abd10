//! Pre-release versions: the `-alpha.1` suffix of a version and its precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SemverError};
use crate::identifier::{compare_numeric, is_numeric, split_and_validate, IdentifierKind};

/// An ordered, non-empty list of pre-release identifiers.
///
/// Ordering follows SemVer precedence: identifiers are compared left to right,
/// numeric identifiers rank below alphanumeric ones, and with an equal prefix
/// the longer list wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreReleaseVersion {
    identifiers: Vec<String>,
}

impl PreReleaseVersion {
    /// Parse dot-separated identifiers, e.g. `alpha.1`
    pub fn parse(s: &str) -> Result<Self> {
        let identifiers = split_and_validate(s, IdentifierKind::PreRelease)?;
        Ok(PreReleaseVersion { identifiers })
    }

    /// Build from a list of identifiers; each element may itself contain dots
    pub fn from_identifiers<I, S>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PreReleaseVersionBuilder::new().identifiers(identifiers).build()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Start a builder pre-filled with these identifiers
    pub fn to_builder(&self) -> PreReleaseVersionBuilder {
        PreReleaseVersionBuilder::new().identifiers(self.identifiers.iter().cloned())
    }
}

fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

impl Ord for PreReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.identifiers.iter().zip(&other.identifiers) {
            match compare_identifiers(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }

        self.identifiers.len().cmp(&other.identifiers.len())
    }
}

impl PartialOrd for PreReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.join("."))
    }
}

impl FromStr for PreReleaseVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Collects raw identifiers and validates them all in [`PreReleaseVersionBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct PreReleaseVersionBuilder {
    identifiers: Vec<String>,
}

impl PreReleaseVersionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifiers.push(identifier.into());
        self
    }

    pub fn identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers.extend(identifiers.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<PreReleaseVersion> {
        if self.identifiers.is_empty() {
            return Err(SemverError::NoIdentifiers {
                kind: IdentifierKind::PreRelease,
            });
        }

        let mut identifiers = Vec::with_capacity(self.identifiers.len());
        for raw in &self.identifiers {
            identifiers.extend(split_and_validate(raw, IdentifierKind::PreRelease)?);
        }

        Ok(PreReleaseVersion { identifiers })
    }
}
