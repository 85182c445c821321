//! Typed identifiers for groups and persons.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::slug::slugify;

/// Identifier of a person group.
///
/// Always a slug derived from the group's display name, so it is safe to
/// embed in resource paths. Deserialization normalizes external input the
/// same way, which makes the identifier form canonical on every boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId(String);

impl GroupId {
    /// Derive the identifier from a human-readable display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    /// Access the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_name(&raw))
    }
}

/// Opaque person identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    /// Wrap an identifier received from the remote service.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Placeholder identifier used when a person name is absent from the
    /// mirrored store.
    ///
    /// The placeholder is passed through to the remote service, which
    /// rejects it — absence is never validated locally.
    #[must_use]
    pub fn missing() -> Self {
        Self("not-found".to_string())
    }

    /// Access the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
