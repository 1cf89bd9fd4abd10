//! Version comparison utilities

use std::cmp::Ordering;

use crate::error::Result;
use crate::operator::Operator;
use crate::version::Version;

/// Compare two versions by SemVer precedence; build metadata is ignored
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> Result<bool> {
        let left = Version::parse(version1)?;
        let right = Version::parse(version2)?;
        Ok(operator.matches(compare(&left, &right)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemverError;

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::greater_than("1.0.0", "1.0.0-rc.1").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("1.0.0-alpha.1", "1.0.0-alpha.beta").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25.0+build.1", "1.25.0+build.2").unwrap());
        assert!(!Comparator::equal_to("1.25.0-rc.1", "1.25.0").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::not_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_compare_with_pre_release() {
        assert!(Comparator::compare("1.0.0-beta.2", Operator::LessThan, "1.0.0-beta.11").unwrap());
        assert!(Comparator::compare("1.0.0-alpha", Operator::LessThan, "1.0.0-alpha.1").unwrap());
        assert!(Comparator::compare("1.0.0-rc.1", Operator::GreaterThan, "1.0.0-beta.11").unwrap());
    }

    #[test]
    fn test_compare_invalid() {
        assert_eq!(
            Comparator::less_than("1.0", "1.0.0"),
            Err(SemverError::MalformedVersion("1.0".to_string()))
        );
        assert!(Comparator::less_than("1.0.0", "1.0.0-01").is_err());
    }

    #[test]
    fn test_compare_fn() {
        let a = Version::parse("1.0.0+aaa").unwrap();
        let b = Version::parse("1.0.0+zzz").unwrap();
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(
            compare(&Version::parse("1.0.0-alpha").unwrap(), &Version::parse("1.0.0-alpha.1").unwrap()),
            Ordering::Less
        );
    }
}
