//! Command surface — the operations exposed to the host dispatch layer.

use facehub_domain::id::GroupId;
use serde::{Deserialize, Serialize};

/// A command accepted by the face service.
///
/// The wire shape is tagged by `command`, e.g.
/// `{"command": "create_person", "group": "family", "name": "Alice"}`.
/// Group fields deserialize through [`GroupId`], so arbitrary input is
/// normalized to slug form on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Create a new person group from a display name.
    CreateGroup {
        /// Display name; the group identifier is derived from it.
        name: String,
    },
    /// Delete a person group by display name.
    DeleteGroup {
        /// Display name; resolved to the group identifier.
        name: String,
    },
    /// Train a group's recognition model.
    TrainGroup {
        /// Group identifier.
        group: GroupId,
    },
    /// Create a person within a group.
    CreatePerson {
        /// Group identifier.
        group: GroupId,
        /// Person name, unique within the group.
        name: String,
    },
    /// Delete a person from a group.
    DeletePerson {
        /// Group identifier.
        group: GroupId,
        /// Person name to resolve and delete.
        name: String,
    },
    /// Capture an image and attach it to a person as a face.
    FacePerson {
        /// Group identifier.
        group: GroupId,
        /// Person name to resolve.
        person: String,
        /// Named camera source to capture from.
        camera: String,
    },
}

impl Command {
    /// The wire name of the command, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateGroup { .. } => "create_group",
            Self::DeleteGroup { .. } => "delete_group",
            Self::TrainGroup { .. } => "train_group",
            Self::CreatePerson { .. } => "create_person",
            Self::DeletePerson { .. } => "delete_person",
            Self::FacePerson { .. } => "face_person",
        }
    }

    /// Reject commands whose textual fields are empty.
    ///
    /// Group identifiers can end up empty when the supplied name contains
    /// no sluggable characters; that is rejected here as well.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyField`] naming the offending field.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            Self::CreateGroup { name } | Self::DeleteGroup { name } => {
                require("name", name)?;
                require("name", GroupId::from_name(name).as_str())
            }
            Self::TrainGroup { group } => require("group", group.as_str()),
            Self::CreatePerson { group, name } | Self::DeletePerson { group, name } => {
                require("group", group.as_str())?;
                require("name", name)
            }
            Self::FacePerson {
                group,
                person,
                camera,
            } => {
                require("group", group.as_str())?;
                require("person", person)?;
                require("camera", camera)
            }
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::EmptyField(field));
    }
    Ok(())
}

/// Command payload validation failure.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A required textual field is empty.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}
