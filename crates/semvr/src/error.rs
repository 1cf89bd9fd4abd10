use thiserror::Error;

use crate::identifier::IdentifierKind;

/// Core version component, used to label numeric errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    // Grammar errors
    #[error("Invalid {kind} identifier \"{identifier}\"")]
    InvalidIdentifier { identifier: String, kind: IdentifierKind },

    #[error("No {kind} identifiers given")]
    NoIdentifiers { kind: IdentifierKind },

    // Core component errors
    #[error("Negative {component} version: {value}")]
    NegativeComponent { component: Component, value: i128 },

    #[error("The {component} version {value} does not fit into 64 bits")]
    ComponentOverflow { component: Component, value: String },

    // Top-level shape
    #[error("Malformed version string \"{0}\"")]
    MalformedVersion(String),
}

pub type Result<T> = std::result::Result<T, SemverError>;
