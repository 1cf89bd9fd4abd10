//! Mutable construction of [`Version`] values

use crate::build_metadata::BuildMetadata;
use crate::error::{Component, Result, SemverError};
use crate::pre_release::PreReleaseVersion;
use crate::version::Version;

/// Fluent builder for [`Version`].
///
/// The plain setters store exactly what they are given. The `increase_*`
/// methods apply the SemVer reset rule: raising major zeroes minor and patch,
/// raising minor zeroes patch. The first negative value handed to a setter,
/// or an increase past `i128::MAX`, is kept and returned by
/// [`VersionBuilder::build`] even if a later reset overwrites the component.
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    major: i128,
    minor: i128,
    patch: i128,
    pre_release: Option<PreReleaseVersion>,
    build_metadata: Option<BuildMetadata>,
    error: Option<SemverError>,
}

impl VersionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn major(mut self, major: impl Into<i128>) -> Self {
        self.major = self.checked(major.into(), Component::Major);
        self
    }

    pub fn minor(mut self, minor: impl Into<i128>) -> Self {
        self.minor = self.checked(minor.into(), Component::Minor);
        self
    }

    pub fn patch(mut self, patch: impl Into<i128>) -> Self {
        self.patch = self.checked(patch.into(), Component::Patch);
        self
    }

    pub fn pre_release(mut self, pre_release: Option<PreReleaseVersion>) -> Self {
        self.pre_release = pre_release;
        self
    }

    pub fn build_metadata(mut self, build_metadata: Option<BuildMetadata>) -> Self {
        self.build_metadata = build_metadata;
        self
    }

    pub fn increase_major(mut self) -> Self {
        self.major = self.increased(self.major, Component::Major);
        self.minor = 0;
        self.patch = 0;
        self
    }

    pub fn increase_minor(mut self) -> Self {
        self.minor = self.increased(self.minor, Component::Minor);
        self.patch = 0;
        self
    }

    pub fn increase_patch(mut self) -> Self {
        self.patch = self.increased(self.patch, Component::Patch);
        self
    }

    fn checked(&mut self, value: i128, component: Component) -> i128 {
        if value < 0 {
            self.record(SemverError::NegativeComponent { component, value });
        }
        value
    }

    fn increased(&mut self, value: i128, component: Component) -> i128 {
        match value.checked_add(1) {
            Some(next) => next,
            None => {
                self.record(SemverError::ComponentOverflow {
                    component,
                    value: (value as u128 + 1).to_string(),
                });
                value
            }
        }
    }

    fn record(&mut self, err: SemverError) {
        self.error.get_or_insert(err);
    }

    pub fn build(self) -> Result<Version> {
        if let Some(err) = self.error {
            return Err(err);
        }

        Ok(Version::from_parts(
            check_component(self.major, Component::Major)?,
            check_component(self.minor, Component::Minor)?,
            check_component(self.patch, Component::Patch)?,
            self.pre_release,
            self.build_metadata,
        ))
    }
}

impl From<&Version> for VersionBuilder {
    fn from(version: &Version) -> Self {
        VersionBuilder {
            major: version.major().into(),
            minor: version.minor().into(),
            patch: version.patch().into(),
            pre_release: version.pre_release().cloned(),
            build_metadata: version.build_metadata().cloned(),
            error: None,
        }
    }
}

fn check_component(value: i128, component: Component) -> Result<u64> {
    if value < 0 {
        return Err(SemverError::NegativeComponent { component, value });
    }

    u64::try_from(value).map_err(|_| SemverError::ComponentOverflow {
        component,
        value: value.to_string(),
    })
}
