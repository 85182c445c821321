//! Per-group status entity — a read-only projection over the mirrored store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{GroupId, PersonId};
use crate::store::FaceStore;

/// Entity-id namespace for group entities.
pub const ENTITY_DOMAIN: &str = "face";

/// In-memory handle for one group's status entity.
///
/// Holds no state of its own: the observable state (person count) and
/// attributes (name → identifier mapping) are recomputed from the store at
/// read time. The presentation layer only sees changes when a new snapshot
/// is explicitly rendered after a mutation; there is no automatic push.
#[derive(Debug, Clone)]
pub struct GroupEntity {
    group_id: GroupId,
    name: String,
}

impl GroupEntity {
    /// Create the handle for one group.
    #[must_use]
    pub fn new(group_id: GroupId, name: impl Into<String>) -> Self {
        Self {
            group_id,
            name: name.into(),
        }
    }

    /// The owning group's identifier.
    #[must_use]
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// The group's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity id in the `face.<group>` namespace.
    #[must_use]
    pub fn entity_id(&self) -> String {
        format!("{ENTITY_DOMAIN}.{}", self.group_id)
    }

    /// Current state: the number of mirrored persons in the group.
    #[must_use]
    pub fn state(&self, store: &FaceStore) -> usize {
        store.person_count(&self.group_id)
    }

    /// Current attributes: the full person name → identifier mapping.
    #[must_use]
    pub fn attributes(&self, store: &FaceStore) -> BTreeMap<String, PersonId> {
        store
            .group(&self.group_id)
            .map(crate::store::GroupRecord::persons)
            .unwrap_or_default()
    }

    /// Render the current store state into a serializable snapshot,
    /// stamped with the render time.
    #[must_use]
    pub fn snapshot(&self, store: &FaceStore) -> EntitySnapshot {
        EntitySnapshot {
            entity_id: self.entity_id(),
            name: self.name.clone(),
            state: self.state(store),
            attributes: self.attributes(store),
            last_updated: Utc::now(),
        }
    }
}

/// Serializable view of a group entity at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Namespaced entity id (`face.<group>`).
    pub entity_id: String,
    /// Display name of the group.
    pub name: String,
    /// Person count at render time.
    pub state: usize,
    /// Person name → remote identifier mapping at render time.
    pub attributes: BTreeMap<String, PersonId>,
    /// When the snapshot was rendered.
    pub last_updated: DateTime<Utc>,
}
