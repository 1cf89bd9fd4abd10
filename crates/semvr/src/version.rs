//! The version aggregate: `major.minor.patch[-pre-release][+build-metadata]`

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::build_metadata::BuildMetadata;
use crate::builder::VersionBuilder;
use crate::error::{Component, Result, SemverError};
use crate::identifier::{validate, IdentifierKind};
use crate::pre_release::PreReleaseVersion;

lazy_static! {
    // Shape only, the captured parts are validated on their own
    static ref VERSION_RE: Regex = Regex::new(
        r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([^+]*))?(?:\+(.*))?$"
    ).unwrap();
}

/// What happens to the pre-release and build metadata of a bumped version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpPolicy {
    /// Drop both suffixes, `1.2.3-rc.1+b5` bumps to `1.2.4`
    #[default]
    ClearSuffixes,
    /// Carry both suffixes over, `1.2.3-rc.1+b5` bumps to `1.2.4-rc.1+b5`
    KeepSuffixes,
}

/// A semantic version.
///
/// Values are immutable; every modifying operation returns a new `Version`.
/// Equality, hashing and ordering follow SemVer precedence, so build metadata
/// is ignored by all three.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<PreReleaseVersion>,
    build_metadata: Option<BuildMetadata>,
}

impl Version {
    /// A plain `major.minor.patch` version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<PreReleaseVersion>,
        build_metadata: Option<BuildMetadata>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Build a version from signed components, rejecting negative ones.
    ///
    /// No component is reset here; see the `bump_*` methods for that.
    pub fn build(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: Option<PreReleaseVersion>,
        build_metadata: Option<BuildMetadata>,
    ) -> Result<Self> {
        VersionBuilder::new()
            .major(major)
            .minor(minor)
            .patch(patch)
            .pre_release(pre_release)
            .build_metadata(build_metadata)
            .build()
    }

    /// Parse a full version string such as `1.0.0-beta+exp.sha.5114f85`.
    ///
    /// A string that does not have the `N.N.N[-...][+...]` shape fails with
    /// [`SemverError::MalformedVersion`]. Once the shape matches, a bad core
    /// number, pre-release or build metadata identifier fails with
    /// [`SemverError::InvalidIdentifier`].
    pub fn parse(s: &str) -> Result<Self> {
        log::trace!("Parsing version \"{}\"", s);
        Self::parse_parts(s).inspect_err(|e| log::debug!("Rejected version \"{}\": {}", s, e))
    }

    fn parse_parts(s: &str) -> Result<Self> {
        let caps = VERSION_RE
            .captures(s)
            .ok_or_else(|| SemverError::MalformedVersion(s.to_string()))?;

        let major = parse_component(&caps[1], Component::Major)?;
        let minor = parse_component(&caps[2], Component::Minor)?;
        let patch = parse_component(&caps[3], Component::Patch)?;

        let pre_release = caps
            .get(4)
            .map(|m| PreReleaseVersion::parse(m.as_str()))
            .transpose()?;
        let build_metadata = caps
            .get(5)
            .map(|m| BuildMetadata::parse(m.as_str()))
            .transpose()?;

        Ok(Version::from_parts(major, minor, patch, pre_release, build_metadata))
    }

    /// Check if a version string is valid
    pub fn is_valid(s: &str) -> bool {
        Self::parse_parts(s).is_ok()
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&PreReleaseVersion> {
        self.pre_release.as_ref()
    }

    pub fn build_metadata(&self) -> Option<&BuildMetadata> {
        self.build_metadata.as_ref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Start a builder holding every part of this version
    pub fn to_builder(&self) -> VersionBuilder {
        VersionBuilder::from(self)
    }

    /// `major + 1`, minor and patch reset to 0, suffixes cleared
    pub fn bump_major(&self) -> Result<Self> {
        self.bump_major_with(BumpPolicy::default())
    }

    /// `minor + 1`, patch reset to 0, suffixes cleared
    pub fn bump_minor(&self) -> Result<Self> {
        self.bump_minor_with(BumpPolicy::default())
    }

    /// `patch + 1`, suffixes cleared
    pub fn bump_patch(&self) -> Result<Self> {
        self.bump_patch_with(BumpPolicy::default())
    }

    pub fn bump_major_with(&self, policy: BumpPolicy) -> Result<Self> {
        self.bump_builder(policy).increase_major().build()
    }

    pub fn bump_minor_with(&self, policy: BumpPolicy) -> Result<Self> {
        self.bump_builder(policy).increase_minor().build()
    }

    pub fn bump_patch_with(&self, policy: BumpPolicy) -> Result<Self> {
        self.bump_builder(policy).increase_patch().build()
    }

    fn bump_builder(&self, policy: BumpPolicy) -> VersionBuilder {
        match policy {
            BumpPolicy::ClearSuffixes => self.to_builder().pre_release(None).build_metadata(None),
            BumpPolicy::KeepSuffixes => self.to_builder(),
        }
    }

    /// A copy of this version with the pre-release replaced
    pub fn with_pre_release(&self, pre_release: Option<PreReleaseVersion>) -> Self {
        Version {
            pre_release,
            ..self.clone()
        }
    }

    /// A copy of this version with the build metadata replaced
    pub fn with_build_metadata(&self, build_metadata: Option<BuildMetadata>) -> Self {
        Version {
            build_metadata,
            ..self.clone()
        }
    }
}

fn parse_component(s: &str, component: Component) -> Result<u64> {
    validate(s, IdentifierKind::Numeric)?;
    s.parse::<u64>().map_err(|_| SemverError::ComponentOverflow {
        component,
        value: s.to_string(),
    })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = (self.major, self.minor, self.patch);
        let b = (other.major, other.minor, other.patch);
        a.cmp(&b).then_with(|| match (&self.pre_release, &other.pre_release) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }

        if let Some(build_metadata) = &self.build_metadata {
            write!(f, "+{}", build_metadata)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
