//! Grammar checks for the dot-separated identifiers of a version string

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SemverError};

/// The grammar an identifier is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// `0|[1-9][0-9]*`, used for major/minor/patch
    Numeric,
    /// `0|[1-9A-Za-z-][0-9A-Za-z-]*`
    PreRelease,
    /// `[0-9A-Za-z-]+`, leading zeros allowed
    BuildMetadata,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Numeric => "numeric",
            IdentifierKind::PreRelease => "pre-release",
            IdentifierKind::BuildMetadata => "build metadata",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            IdentifierKind::Numeric => &*NUMERIC_RE,
            IdentifierKind::PreRelease => &*PRE_RELEASE_RE,
            IdentifierKind::BuildMetadata => &*BUILD_METADATA_RE,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

lazy_static! {
    static ref NUMERIC_RE: Regex = Regex::new(r"^(?:0|[1-9][0-9]*)$").unwrap();

    static ref PRE_RELEASE_RE: Regex = Regex::new(r"^(?:0|[1-9A-Za-z-][0-9A-Za-z-]*)$").unwrap();

    static ref BUILD_METADATA_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// Check a single identifier against the grammar of `kind`
pub fn is_valid(token: &str, kind: IdentifierKind) -> bool {
    kind.pattern().is_match(token)
}

/// Return `token` unchanged if it matches the grammar of `kind`
pub fn validate(token: &str, kind: IdentifierKind) -> Result<&str> {
    if is_valid(token, kind) {
        Ok(token)
    } else {
        Err(SemverError::InvalidIdentifier {
            identifier: token.to_string(),
            kind,
        })
    }
}

/// Whether a pre-release identifier takes part in precedence as a number
pub fn is_numeric(token: &str) -> bool {
    is_valid(token, IdentifierKind::Numeric)
}

/// Split `s` on `.` and validate every segment.
///
/// An empty input or an empty segment (`"a..b"`, `"a."`) is rejected.
pub fn split_and_validate(s: &str, kind: IdentifierKind) -> Result<Vec<String>> {
    s.split('.')
        .map(|token| validate(token, kind).map(str::to_string))
        .collect()
}

/// Compare two numeric identifiers of any length.
///
/// Both sides must match the numeric grammar: without leading zeros the shorter
/// numeral is the smaller one, and equal lengths compare byte by byte.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
