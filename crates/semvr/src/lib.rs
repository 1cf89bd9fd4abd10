//! Strict Semantic Versioning 2.0.0
//!
//! This crate parses, validates, builds and compares versions of the form
//! `major.minor.patch[-pre-release][+build-metadata]`. Every value is validated
//! when it is constructed and is immutable afterwards.
//!
//! ```
//! use semvr::Version;
//!
//! let version = Version::parse("1.0.0-alpha.1").unwrap();
//! assert!(version < Version::parse("1.0.0-alpha.beta").unwrap());
//! assert_eq!(version.bump_minor().unwrap().to_string(), "1.1.0");
//! ```

mod build_metadata;
mod builder;
mod comparator;
mod error;
pub mod identifier;
mod operator;
mod pre_release;
mod semver;
mod version;

pub use build_metadata::{BuildMetadata, BuildMetadataBuilder};
pub use builder::VersionBuilder;
pub use comparator::{compare, Comparator};
pub use error::{Component, Result, SemverError};
pub use identifier::IdentifierKind;
pub use operator::{InvalidOperatorError, Operator};
pub use pre_release::{PreReleaseVersion, PreReleaseVersionBuilder};
pub use semver::Semver;
pub use version::{BumpPolicy, Version};
