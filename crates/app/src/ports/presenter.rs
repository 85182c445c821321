//! Presentation port — rendering of entity snapshots.

use std::future::Future;

use facehub_domain::entity::EntitySnapshot;

/// Receives rendered entity snapshots from the face service.
///
/// Snapshots are pushed explicitly after store mutations; the presenter
/// never pulls. A render replaces whatever was previously shown for the
/// same entity id.
pub trait StatePresenter {
    /// Render (insert or replace) one entity snapshot.
    fn upsert(&self, snapshot: EntitySnapshot) -> impl Future<Output = ()> + Send;

    /// Remove a previously rendered entity.
    fn remove(&self, entity_id: &str) -> impl Future<Output = ()> + Send;
}

impl<T: StatePresenter + Send + Sync> StatePresenter for std::sync::Arc<T> {
    fn upsert(&self, snapshot: EntitySnapshot) -> impl Future<Output = ()> + Send {
        (**self).upsert(snapshot)
    }

    fn remove(&self, entity_id: &str) -> impl Future<Output = ()> + Send {
        (**self).remove(entity_id)
    }
}
