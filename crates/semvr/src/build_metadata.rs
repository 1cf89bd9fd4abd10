//! Build metadata: the `+exp.sha.5114f85` suffix of a version

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SemverError};
use crate::identifier::{split_and_validate, IdentifierKind};

/// An ordered, non-empty list of build metadata identifiers.
///
/// Build metadata carries no precedence, so this type is intentionally not `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    /// Parse dot-separated identifiers, e.g. `exp.sha.5114f85`
    pub fn parse(s: &str) -> Result<Self> {
        let identifiers = split_and_validate(s, IdentifierKind::BuildMetadata)?;
        Ok(BuildMetadata { identifiers })
    }

    /// Build from a list of identifiers; each element may itself contain dots
    pub fn from_identifiers<I, S>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BuildMetadataBuilder::new().identifiers(identifiers).build()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Start a builder pre-filled with these identifiers
    pub fn to_builder(&self) -> BuildMetadataBuilder {
        BuildMetadataBuilder::new().identifiers(self.identifiers.iter().cloned())
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.join("."))
    }
}

impl FromStr for BuildMetadata {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Collects raw identifiers and validates them all in [`BuildMetadataBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct BuildMetadataBuilder {
    identifiers: Vec<String>,
}

impl BuildMetadataBuilder {
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

    pub fn build(self) -> Result<BuildMetadata> {
        if self.identifiers.is_empty() {
            return Err(SemverError::NoIdentifiers {
                kind: IdentifierKind::BuildMetadata,
            });
        }

        let mut identifiers = Vec::with_capacity(self.identifiers.len());
        for raw in &self.identifiers {
            identifiers.extend(split_and_validate(raw, IdentifierKind::BuildMetadata)?);
        }

        Ok(BuildMetadata { identifiers })
    }
}
