//! Semver facade providing high-level version operations

use crate::error::Result;
use crate::version::Version;

/// Main facade for semantic versioning operations on plain strings
pub struct Semver;

impl Semver {
    /// Check if a string is a valid semantic version
    pub fn is_valid(version: &str) -> bool {
        Version::is_valid(version)
    }

    /// Sort versions in ascending order of precedence
    pub fn sort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order of precedence
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, false)
    }

    /// The highest version of the list, `None` for an empty list
    pub fn max(versions: &[&str]) -> Result<Option<String>> {
        Ok(Self::rsort(versions)?.into_iter().next())
    }

    /// The lowest version of the list, `None` for an empty list
    pub fn min(versions: &[&str]) -> Result<Option<String>> {
        Ok(Self::sort(versions)?.into_iter().next())
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>> {
        // Parse once, keep the original index so the input strings come back untouched
        let mut parsed = versions
            .iter()
            .enumerate()
            .map(|(i, v)| Ok((Version::parse(v)?, i)))
            .collect::<Result<Vec<_>>>()?;

        // Stable: equal precedence (e.g. differing build metadata) keeps input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect())
    }
}
