//! Rendered entity state — the presentation-side snapshot registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use facehub_app::ports::StatePresenter;
use facehub_domain::entity::EntitySnapshot;

/// Shared map of rendered entity snapshots, keyed by entity id.
///
/// This is the state the HTTP layer serves. It only changes when the face
/// service explicitly renders a snapshot — a read between a store mutation
/// and its render sees the previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entries: Arc<RwLock<HashMap<String, EntitySnapshot>>>,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rendered snapshots, ordered by entity id.
    pub async fn all(&self) -> Vec<EntitySnapshot> {
        let entries = self.entries.read().await;
        let mut snapshots: Vec<_> = entries.values().cloned().collect();
        snapshots.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        snapshots
    }

    /// One rendered snapshot by entity id.
    pub async fn get(&self, entity_id: &str) -> Option<EntitySnapshot> {
        self.entries.read().await.get(entity_id).cloned()
    }
}

impl StatePresenter for EntityRegistry {
    async fn upsert(&self, snapshot: EntitySnapshot) {
        self.entries
            .write()
            .await
            .insert(snapshot.entity_id.clone(), snapshot);
    }

    async fn remove(&self, entity_id: &str) {
        self.entries.write().await.remove(entity_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facehub_domain::id::GroupId;
    use facehub_domain::store::FaceStore;

    fn snapshot(name: &str) -> EntitySnapshot {
        let id = GroupId::from_name(name);
        let mut store = FaceStore::new();
        store.insert_group(id.clone(), name);
        facehub_domain::entity::GroupEntity::new(id, name).snapshot(&store)
    }

    #[tokio::test]
    async fn should_replace_snapshot_when_upserted_twice() {
        let registry = EntityRegistry::new();

        registry.upsert(snapshot("Family")).await;
        registry.upsert(snapshot("Family")).await;

        assert_eq!(registry.all().await.len(), 1);
    }

    #[tokio::test]
    async fn should_order_snapshots_by_entity_id() {
        let registry = EntityRegistry::new();

        registry.upsert(snapshot("Staff")).await;
        registry.upsert(snapshot("Family")).await;

        let ids: Vec<_> = registry
            .all()
            .await
            .into_iter()
            .map(|snapshot| snapshot.entity_id)
            .collect();
        assert_eq!(ids, vec!["face.family".to_string(), "face.staff".to_string()]);
    }

    #[tokio::test]
    async fn should_return_none_after_removal() {
        let registry = EntityRegistry::new();
        registry.upsert(snapshot("Family")).await;

        registry.remove("face.family").await;

        assert!(registry.get("face.family").await.is_none());
        assert!(registry.all().await.is_empty());
    }
}
